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
    match schema {
        Value::Array(options) => {
            if options.iter().any(|option| helpers::equal(instance, option)) {
                Vec::new()
            } else {
                vec![context.error(
                    instance,
                    ValidationErrorKind::Enum {
                        options: schema.clone(),
                    },
                )]
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

    #[test_case(json!({"enum": [1, 2, 3]}), json!(2))]
    #[test_case(json!({"enum": [1]}), json!(1.0); "numbers compare by value")]
    #[test_case(json!({"enum": [{"a": 1}]}), json!({"a": 1.0}))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"enum": [1, 2, 3]}), json!(4))]
    #[test_case(json!({"enum": [1]}), json!(true); "booleans are not numbers")]
    #[test_case(json!({"enum": []}), json!(null))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
