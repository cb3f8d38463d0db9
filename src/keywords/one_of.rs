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
            let mut valid = 0;
            for subschema in subschemas {
                if descend(context, instance, subschema).is_empty() {
                    valid += 1;
                }
            }
            match valid {
                1 => Vec::new(),
                0 => vec![context.error(instance, ValidationErrorKind::OneOfNotValid)],
                _ => vec![context.error(instance, ValidationErrorKind::OneOfMultipleValid)],
            }
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), json!(1))]
    #[test_case(json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), json!(2.5))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), json!(1.5); "matches none")]
    #[test_case(json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), json!(3); "matches both")]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
