use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_builder::DirectiveAnnotation;
use libgraphql_builder::DirectiveAnnotationBuilder;
use libgraphql_builder::Value;
use libgraphql_builder::operation::DocumentBuilder;
use libgraphql_builder::operation::FieldSelection;
use libgraphql_builder::operation::FieldSelectionBuilder;
use libgraphql_builder::operation::FragmentDefinition;
use libgraphql_builder::operation::FragmentSpread;
use libgraphql_builder::operation::OperationKind;
use libgraphql_builder::operation::Selection;
use libgraphql_builder::operation::VariableDefinition;
use libgraphql_builder::render::RenderOptions;
use serde::Deserialize;

/// JSON description of a whole operation document.
///
/// ```json
/// {
///   "operation": "query",
///   "name": "GetUser",
///   "variables": [{"name": "id", "type": "ID!"}],
///   "selections": [
///     {
///       "name": "user",
///       "arguments": {"id": {"$raw": "$id"}},
///       "selections": [{"name": "name"}, {"spread": "UserFields"}]
///     }
///   ],
///   "select": ["viewer.avatar"],
///   "fragments": [
///     {"name": "UserFields", "on": "User", "selections": [{"name": "email"}]}
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DocumentDescription {
    #[serde(default)]
    fragments: Vec<FragmentDescription>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    operation: OperationKindDescription,
    #[serde(default)]
    select: Vec<String>,
    #[serde(default)]
    selections: Vec<SelectionDescription>,
    #[serde(default)]
    variables: Vec<VariableDescription>,
}
impl DocumentDescription {
    pub(crate) fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Malformed document description")
    }

    /// Build the described document into a [`DocumentBuilder`], failing on
    /// the first malformed piece.
    pub(crate) fn into_document_builder(
        self,
        render_options: RenderOptions,
    ) -> anyhow::Result<DocumentBuilder> {
        let mut builder =
            DocumentBuilder::new(self.operation.into())
                .with_render_options(render_options);

        if let Some(name) = self.name {
            builder = builder.name(name)?;
        }

        for variable in self.variables {
            let var_name = variable.name.clone();
            builder = builder.add_variable(
                variable.into_definition()
                    .with_context(|| format!("In variable `${var_name}`"))?,
            )?;
        }

        for selection in self.selections {
            builder = builder.add_selection(selection.into_selection()?);
        }

        for path in self.select {
            builder = builder.select(&path)?;
        }

        for fragment in self.fragments {
            let fragment_name = fragment.name.clone();
            builder = builder.add_fragment(
                fragment.into_definition()
                    .with_context(|| format!("In fragment `{fragment_name}`"))?,
            )?;
        }

        Ok(builder)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OperationKindDescription {
    Mutation,
    #[default]
    Query,
    Subscription,
}
impl From<OperationKindDescription> for OperationKind {
    fn from(kind: OperationKindDescription) -> Self {
        match kind {
            OperationKindDescription::Mutation => OperationKind::Mutation,
            OperationKindDescription::Query => OperationKind::Query,
            OperationKindDescription::Subscription => OperationKind::Subscription,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DirectiveDescription {
    #[serde(default)]
    arguments: IndexMap<String, serde_json::Value>,
    name: String,
}
impl DirectiveDescription {
    fn into_annotation(self) -> anyhow::Result<DirectiveAnnotation> {
        let directive_name = self.name.clone();
        let mut builder = DirectiveAnnotationBuilder::new(self.name)?;
        for (arg_name, json) in self.arguments {
            let value = Value::try_from(json).with_context(|| format!(
                "In argument `{arg_name}` of directive `@{directive_name}`",
            ))?;
            builder = builder.add_argument(arg_name, value)?;
        }
        Ok(builder.build())
    }
}

fn into_annotations(
    directives: Vec<DirectiveDescription>,
) -> anyhow::Result<Vec<DirectiveAnnotation>> {
    directives.into_iter()
        .map(DirectiveDescription::into_annotation)
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDescription {
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    arguments: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    directives: Vec<DirectiveDescription>,
    name: String,
    #[serde(default)]
    selections: Vec<SelectionDescription>,
}
impl FieldDescription {
    fn into_field(self) -> anyhow::Result<FieldSelection> {
        let field_name = self.name.clone();
        let mut builder = FieldSelectionBuilder::new(self.name)?;

        if let Some(alias) = self.alias {
            builder = builder.alias(alias)?;
        }

        for (arg_name, json) in self.arguments {
            let value = Value::try_from(json).with_context(|| format!(
                "In argument `{arg_name}` of field `{field_name}`",
            ))?;
            builder = builder.add_argument(arg_name, value)?;
        }

        for directive in into_annotations(self.directives)? {
            builder = builder.add_directive(directive);
        }

        for selection in self.selections {
            let selection = selection.into_selection()
                .with_context(|| format!("In field `{field_name}`"))?;
            builder = builder.add_selection(selection);
        }

        Ok(builder.build())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FragmentDescription {
    #[serde(default)]
    directives: Vec<DirectiveDescription>,
    name: String,
    on: String,
    selections: Vec<SelectionDescription>,
}
impl FragmentDescription {
    fn into_definition(self) -> anyhow::Result<FragmentDefinition> {
        let mut builder = FragmentDefinition::builder(self.name, self.on)?;
        for directive in into_annotations(self.directives)? {
            builder = builder.add_directive(directive);
        }
        for selection in self.selections {
            builder = builder.add_selection(selection.into_selection()?);
        }
        Ok(builder.build()?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FragmentSpreadDescription {
    #[serde(default)]
    directives: Vec<DirectiveDescription>,
    spread: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SelectionDescription {
    FragmentSpread(FragmentSpreadDescription),
    Field(FieldDescription),
}
impl SelectionDescription {
    fn into_selection(self) -> anyhow::Result<Selection> {
        Ok(match self {
            Self::Field(field) => Selection::Field(field.into_field()?),
            Self::FragmentSpread(spread) => {
                let mut fragment_spread = FragmentSpread::new(spread.spread)?;
                for directive in into_annotations(spread.directives)? {
                    fragment_spread = fragment_spread.add_directive(directive);
                }
                Selection::FragmentSpread(fragment_spread)
            },
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariableDescription {
    #[serde(default)]
    default: Option<serde_json::Value>,
    name: String,
    #[serde(rename = "type")]
    type_annotation: String,
}
impl VariableDescription {
    fn into_definition(self) -> anyhow::Result<VariableDefinition> {
        let variable = VariableDefinition::new(self.name, self.type_annotation)?;
        Ok(match self.default {
            Some(json) => variable.with_default_value(Value::try_from(json)?)?,
            None => variable,
        })
    }
}
