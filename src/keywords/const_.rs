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
    if helpers::equal(instance, schema) {
        Vec::new()
    } else {
        vec![context.error(
            instance,
            ValidationErrorKind::Constant {
                expected_value: schema.clone(),
            },
        )]
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"const": 2}), json!(2))]
    #[test_case(json!({"const": 2}), json!(2.0))]
    #[test_case(json!({"const": null}), json!(null))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"const": 2}), json!(5))]
    #[test_case(json!({"const": true}), json!(false))]
    #[test_case(json!({"const": "a"}), json!("b"))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
