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
    if !schema.is_object() && !schema.is_boolean() {
        return vec![context.error(instance, ValidationErrorKind::Schema)];
    }
    if descend(context, instance, schema).is_empty() {
        vec![context.error(
            instance,
            ValidationErrorKind::Not {
                schema: schema.clone(),
            },
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"not": {"type": "integer"}}), json!("a"))]
    #[test_case(json!({"not": false}), json!(null))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"not": {"type": "integer"}}), json!(1))]
    #[test_case(json!({"not": true}), json!(null))]
    #[test_case(json!({"not": {}}), json!("anything"))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
