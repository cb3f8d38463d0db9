use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    validator::descend,
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match schema {
        Value::Array(subschemas) => {
            // First success wins; branch errors are not reported.
            for subschema in subschemas {
                if descend(context, instance, subschema).is_empty() {
                    return Vec::new();
                }
            }
            vec![context.error(instance, ValidationErrorKind::AnyOf)]
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
