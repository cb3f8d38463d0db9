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
        (Value::Number(limit), Value::Array(items)) => match limit.as_u64() {
            Some(limit) if (items.len() as u64) < limit => {
                vec![context.error(instance, ValidationErrorKind::MinItems { limit })]
            }
            Some(_) => Vec::new(),
            None => vec![context.error(instance, ValidationErrorKind::Schema)],
        },
        (Value::Number(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn counts_items() {
        tests_util::is_valid(&json!({"minItems": 1}), &json!([1]));
        tests_util::is_not_valid(&json!({"minItems": 1}), &json!([]));
    }
}
