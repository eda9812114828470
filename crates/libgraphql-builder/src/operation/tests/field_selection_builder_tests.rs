use crate::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FieldSelectionBuildError;
use crate::operation::Selection;
use crate::Value;
use crate::ValueError;

#[test]
fn builds_all_parts() {
    let field = FieldSelection::builder("user").unwrap()
        .alias("me").unwrap()
        .add_argument("id", 5).unwrap()
        .add_directive(DirectiveAnnotation::include(true).unwrap())
        .add_field(FieldSelection::leaf("name").unwrap())
        .build();

    assert_eq!(field.field_name(), "user");
    assert_eq!(field.alias(), Some("me"));
    assert_eq!(field.selected_name(), "me");
    assert_eq!(field.arguments().get("id"), Some(&Value::Int(5)));
    assert_eq!(field.directives().len(), 1);
    assert_eq!(field.directives()[0].name(), "include");
    assert!(!field.is_leaf());
    assert_eq!(
        field.selections()[0].as_field().map(|f| f.field_name()),
        Some("name"),
    );
}

#[test]
fn selected_name_without_alias_is_field_name() {
    let field = FieldSelection::leaf("email").unwrap();
    assert_eq!(field.selected_name(), "email");
    assert!(field.is_leaf());
}

#[test]
fn empty_field_name_fails_fast() {
    assert_eq!(
        FieldSelection::builder("").unwrap_err(),
        FieldSelectionBuildError::EmptyFieldName,
    );
}

#[test]
fn invalid_field_name_fails_fast() {
    assert_eq!(
        FieldSelection::leaf("1st").unwrap_err(),
        FieldSelectionBuildError::InvalidFieldName {
            field_name: "1st".to_string(),
        },
    );
    assert!(matches!(
        FieldSelection::leaf("user { id }"),
        Err(FieldSelectionBuildError::InvalidFieldName { .. }),
    ));
}

#[test]
fn empty_alias_fails_fast() {
    let result = FieldSelection::builder("user").unwrap().alias("");
    assert_eq!(
        result.unwrap_err(),
        FieldSelectionBuildError::EmptyAlias {
            field_name: "user".to_string(),
        },
    );
}

#[test]
fn invalid_alias_fails_fast() {
    let result = FieldSelection::builder("user").unwrap().alias("my-user");
    assert!(matches!(result, Err(FieldSelectionBuildError::InvalidAlias { .. })));
}

#[test]
fn duplicate_argument_fails_fast() {
    let result = FieldSelection::builder("user").unwrap()
        .add_argument("id", 1).unwrap()
        .add_argument("id", 2);

    assert_eq!(
        result.unwrap_err(),
        FieldSelectionBuildError::DuplicateArgument {
            argument_name: "id".to_string(),
            field_name: "user".to_string(),
        },
    );
}

#[test]
fn invalid_argument_name_fails_fast() {
    let result = FieldSelection::builder("user").unwrap().add_argument("$id", 1);
    assert!(matches!(
        result,
        Err(FieldSelectionBuildError::InvalidArgumentName { .. }),
    ));
}

#[test]
fn non_finite_float_argument_fails_fast() {
    let result = FieldSelection::builder("point").unwrap()
        .add_argument("x", Value::list([1.0, f64::NAN]));

    match result {
        Err(FieldSelectionBuildError::InvalidArgumentValue {
            argument_name,
            error: ValueError::NonFiniteFloat { .. },
            field_name,
        }) => {
            assert_eq!(argument_name, "x");
            assert_eq!(field_name, "point");
        },
        other => panic!("Expected InvalidArgumentValue, got: {other:?}"),
    }
}

#[test]
fn invalid_object_key_argument_fails_fast() {
    let result = FieldSelection::builder("users").unwrap()
        .add_argument("where", Value::object([("first name", "Ada")]));

    assert!(matches!(
        result,
        Err(FieldSelectionBuildError::InvalidArgumentValue {
            error: ValueError::InvalidObjectKey { .. },
            ..
        }),
    ));
}

#[test]
fn add_arguments_preserves_order() {
    let field = FieldSelection::builder("users").unwrap()
        .add_arguments([
            ("first", Value::Int(10)),
            ("orderBy", Value::raw("NAME")),
            ("after", Value::Null),
        ]).unwrap()
        .build();

    let names: Vec<&str> = field.arguments().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["first", "orderBy", "after"]);
}

#[test]
fn add_arguments_stops_at_first_duplicate() {
    let result = FieldSelection::builder("users").unwrap()
        .add_arguments([("a", 1), ("b", 2), ("a", 3)]);
    assert!(matches!(
        result,
        Err(FieldSelectionBuildError::DuplicateArgument { .. }),
    ));
}

#[test]
fn from_path_builds_single_child_chain() {
    let field = FieldSelection::from_path("viewer.profile.avatar").unwrap();

    assert_eq!(field.field_name(), "viewer");
    let Selection::Field(profile) = &field.selections()[0] else {
        panic!("Expected a field selection");
    };
    assert_eq!(profile.field_name(), "profile");
    let Selection::Field(avatar) = &profile.selections()[0] else {
        panic!("Expected a field selection");
    };
    assert_eq!(avatar.field_name(), "avatar");
    assert!(avatar.is_leaf());
}

#[test]
fn from_path_single_segment_is_a_leaf() {
    assert_eq!(
        FieldSelection::from_path("id").unwrap(),
        FieldSelection::leaf("id").unwrap(),
    );
}

#[test]
fn from_path_rejects_empty_segments() {
    for path in ["", ".a", "a.", "a..b"] {
        assert_eq!(
            FieldSelection::from_path(path).unwrap_err(),
            FieldSelectionBuildError::EmptyPathSegment {
                path: path.to_string(),
            },
            "path: {path:?}",
        );
    }
}

#[test]
fn from_path_rejects_invalid_segments() {
    assert!(matches!(
        FieldSelection::from_path("a.b-c"),
        Err(FieldSelectionBuildError::InvalidFieldName { .. }),
    ));
}
