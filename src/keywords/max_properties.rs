use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::Number(limit), Value::Object(item)) => match limit.as_u64() {
            Some(limit) if (item.len() as u64) > limit => {
                vec![context.error(instance, ValidationErrorKind::MaxProperties { limit })]
            }
            Some(_) => Vec::new(),
            None => vec![context.error(instance, ValidationErrorKind::Schema)],
        },
        (Value::Number(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
