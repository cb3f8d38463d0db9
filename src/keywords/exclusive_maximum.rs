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
            if helpers::num_lt(item, limit) {
                Vec::new()
            } else {
                vec![context.error(
                    instance,
                    ValidationErrorKind::ExclusiveMaximum {
                        limit: limit.as_f64().expect("Always valid"),
                    },
                )]
            }
        }
        (Value::Number(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    const DRAFT7: &str = "http://json-schema.org/draft-07/schema#";

    #[test_case(json!({"$schema": DRAFT7, "exclusiveMaximum": 3.0}), json!(2.9))]
    #[test_case(json!({"$schema": DRAFT7, "exclusiveMaximum": 3}), json!(null))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"$schema": DRAFT7, "exclusiveMaximum": 3.0}), json!(3.0))]
    #[test_case(json!({"$schema": DRAFT7, "exclusiveMaximum": 3}), json!(4))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
