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
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    // Applies only when `items` is positional; otherwise every element is
    // already covered.
    let limit = match parent.get("items") {
        Some(Value::Array(subschemas)) => subschemas.len(),
        _ => return Vec::new(),
    };
    let items = match instance {
        Value::Array(items) => items,
        _ => return Vec::new(),
    };
    if items.len() <= limit {
        return Vec::new();
    }
    match schema {
        Value::Bool(true) => Vec::new(),
        Value::Bool(false) => {
            vec![context.error(instance, ValidationErrorKind::AdditionalItems { limit })]
        }
        Value::Object(_) => {
            let mut errors = Vec::new();
            for (index, item) in items.iter().enumerate().skip(limit) {
                context.push_instance(index);
                errors.extend(descend(context, item, schema));
                context.pop_instance();
            }
            errors
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"items": [{}], "additionalItems": false}), json!([1]))]
    #[test_case(json!({"items": [{}], "additionalItems": {"type": "integer"}}), json!([null, 2, 3]))]
    #[test_case(json!({"additionalItems": false}), json!([1, 2]); "inert without positional items")]
    #[test_case(json!({"items": {}, "additionalItems": false}), json!([1, 2]))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"items": [{}, {}, {}], "additionalItems": false}), json!([1, 2, 3, 4]))]
    #[test_case(json!({"items": [{}], "additionalItems": {"type": "integer"}}), json!([null, "foo"]))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }

    #[test]
    fn error_message_names_the_extras() {
        let schema = json!({"items": [{}, {}, {}], "additionalItems": false});
        let result = crate::validate(&json!([1, 2, 3, 4]), &schema);
        assert_eq!(
            result.errors()[0].to_string(),
            "Additional items are not allowed (4 was unexpected)"
        );
        let result = crate::validate(&json!([1, 2, 3, 4, 5]), &schema);
        assert_eq!(
            result.errors()[0].to_string(),
            "Additional items are not allowed (4, 5 were unexpected)"
        );
    }
}
