use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    validator::descend,
};
use serde_json::{Map, Value};

/// Every property name validates, as a string instance, against the
/// subschema.
pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    if !schema.is_object() && !schema.is_boolean() {
        return vec![context.error(instance, ValidationErrorKind::Schema)];
    }
    let items = match instance {
        Value::Object(items) => items,
        _ => return Vec::new(),
    };
    let mut errors = Vec::new();
    for name in items.keys() {
        let name_value = Value::String(name.clone());
        context.push_instance(name.as_str());
        errors.extend(descend(context, &name_value, schema));
        context.pop_instance();
    }
    errors
}
