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
    match (schema, instance) {
        (Value::Object(properties), Value::Object(items)) => {
            let mut errors = Vec::new();
            // Instance order, so that sub-errors come out in document order.
            for (name, item) in items {
                if let Some(subschema) = properties.get(name) {
                    context.push_keyword(name.as_str());
                    context.push_instance(name.as_str());
                    errors.extend(descend(context, item, subschema));
                    context.pop_instance();
                    context.pop_keyword();
                }
            }
            errors
        }
        (Value::Object(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
