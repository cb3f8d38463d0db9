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
        (Value::Number(limit), Value::String(item)) => match limit.as_u64() {
            // Lengths count Unicode scalar values, not bytes.
            Some(limit) if (item.chars().count() as u64) < limit => {
                vec![context.error(instance, ValidationErrorKind::MinLength { limit })]
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
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"minLength": 2}), json!("fo"))]
    #[test_case(json!({"minLength": 3}), json!("日本語"); "code points not bytes")]
    #[test_case(json!({"minLength": 2}), json!(1))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"minLength": 2}), json!("f"))]
    #[test_case(json!({"minLength": 4}), json!("日本語"))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
