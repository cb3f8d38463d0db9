use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::items,
};
use serde_json::{Map, Value};

/// The 2020-12 spelling of positional item schemas.
pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::Array(subschemas), Value::Array(elements)) => {
            items::validate_positional(context, subschemas, elements)
        }
        (Value::Array(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
