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
            Some(limit) if (item.len() as u64) < limit => {
                vec![context.error(instance, ValidationErrorKind::MinProperties { limit })]
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
    fn counts_properties() {
        tests_util::is_valid(&json!({"minProperties": 1}), &json!({"a": 1}));
        tests_util::is_not_valid(&json!({"minProperties": 1}), &json!({}));
    }
}
