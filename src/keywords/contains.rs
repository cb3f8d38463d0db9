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
    let items = match instance {
        Value::Array(items) => items,
        _ => return Vec::new(),
    };
    for item in items {
        if descend(context, item, schema).is_empty() {
            return Vec::new();
        }
    }
    vec![context.error(instance, ValidationErrorKind::Contains)]
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    const DRAFT6: &str = "http://json-schema.org/draft-06/schema#";

    #[test_case(json!({"$schema": DRAFT6, "contains": {"minimum": 5}}), json!([2, 3, 6]))]
    #[test_case(json!({"$schema": DRAFT6, "contains": {"minimum": 5}}), json!("not an array"))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"$schema": DRAFT6, "contains": {"minimum": 5}}), json!([2, 3, 4]))]
    #[test_case(json!({"$schema": DRAFT6, "contains": {"minimum": 5}}), json!([]); "empty arrays contain nothing")]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
