use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::Number(limit), Value::Number(item)) => {
            if helpers::num_le(item, limit) {
                Vec::new()
            } else {
                vec![context.error(
                    instance,
                    ValidationErrorKind::Maximum {
                        limit: limit.as_f64().expect("Always valid"),
                    },
                )]
            }
        }
        (Value::Number(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
