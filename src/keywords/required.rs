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
        (Value::Array(names), Value::Object(item)) => {
            let mut missing = Vec::new();
            for name in names {
                match name {
                    // Presence is what counts, not non-null.
                    Value::String(name) => {
                        if !item.contains_key(name) {
                            missing.push(name.clone());
                        }
                    }
                    _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
                }
            }
            if missing.is_empty() {
                Vec::new()
            } else {
                vec![context.error(
                    instance,
                    ValidationErrorKind::Required {
                        properties: missing,
                    },
                )]
            }
        }
        (Value::Array(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"required": ["a"]}), json!({"a": 1}))]
    #[test_case(json!({"required": ["a"]}), json!({"a": null}); "null counts as present")]
    #[test_case(json!({"required": ["a"]}), json!([]))]
    #[test_case(json!({"required": []}), json!({}))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"required": ["a"]}), json!({}))]
    #[test_case(json!({"required": ["a", "b"]}), json!({"b": 1, "c": 2}))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }

    #[test]
    fn reports_all_missing_names_at_once() {
        let result = crate::validate(&json!({}), &json!({"required": ["a", "b"]}));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].to_string(),
            "'a', 'b' are required properties"
        );
    }
}
