use crate::Value;
use graphql_parser::query as gql;

/// Parses `document` with `graphql-parser`, panicking with the document text
/// if it is not valid GraphQL.
pub(super) fn parse_document(document: &str) -> gql::Document<'_, String> {
    match graphql_parser::parse_query::<String>(document) {
        Ok(parsed) => parsed,
        Err(e) => panic!("Failed to parse generated document:\n{document}\n{e}"),
    }
}

/// Encodes `value` into argument position of a tiny query, parses it back,
/// and asserts that the parsed argument means the same thing as `value`.
pub(super) fn assert_parses_back(value: &Value) {
    let document = format!("query {{ f(v: {value}) }}");
    let parsed = parse_document(&document);
    let Some(gql::Definition::Operation(gql::OperationDefinition::Query(query))) =
        parsed.definitions.first()
    else {
        panic!("Expected a query operation in:\n{document}");
    };
    let Some(gql::Selection::Field(field)) = query.selection_set.items.first() else {
        panic!("Expected a field selection in:\n{document}");
    };
    let (_, parsed_value) = field.arguments.first().expect("one argument");
    assert_equivalent(value, parsed_value);
}

/// Asserts that a parsed GraphQL value means the same thing as `expected`.
pub(super) fn assert_equivalent(expected: &Value, parsed: &gql::Value<'_, String>) {
    match (expected, parsed) {
        (Value::Null, gql::Value::Null) => (),
        (Value::Bool(a), gql::Value::Boolean(b)) => assert_eq!(a, b),
        (Value::Int(a), gql::Value::Int(b)) => assert_eq!(Some(*a), b.as_i64()),
        (Value::Float(a), gql::Value::Float(b)) => assert_eq!(a, b),
        (Value::String(a), gql::Value::String(b)) => assert_eq!(a, b),
        (Value::Raw(a), gql::Value::Enum(b)) => assert_eq!(a, b),
        (Value::Raw(a), gql::Value::Variable(b)) => assert_eq!(a, &format!("${b}")),
        (Value::List(a), gql::Value::List(b)) => {
            assert_eq!(a.len(), b.len());
            for (a, b) in a.iter().zip(b) {
                assert_equivalent(a, b);
            }
        },
        (Value::Object(a), gql::Value::Object(b)) => {
            assert_eq!(a.len(), b.len());
            for (key, a) in a {
                let b = b.get(key).unwrap_or_else(|| panic!("missing key `{key}`"));
                assert_equivalent(a, b);
            }
        },
        (expected, parsed) => panic!("Expected {expected:?}, parsed {parsed:?}"),
    }
}
