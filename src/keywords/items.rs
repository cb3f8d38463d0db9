use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    schemas::Draft,
    validator::descend,
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let items = match instance {
        Value::Array(items) => items,
        _ => return Vec::new(),
    };
    match schema {
        Value::Array(subschemas) => validate_positional(context, subschemas, items),
        Value::Object(_) | Value::Bool(_) => {
            // In 2020-12 `items` governs only the elements after `prefixItems`.
            let skip = if context.dialect.draft() == Draft::Draft202012 {
                parent
                    .get("prefixItems")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len)
            } else {
                0
            };
            let mut errors = Vec::new();
            for (index, item) in items.iter().enumerate().skip(skip) {
                context.push_instance(index);
                errors.extend(descend(context, item, schema));
                context.pop_instance();
            }
            errors
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

/// Pair elements with subschemas by position. Elements past the subschema
/// list are governed by `additionalItems`.
pub(crate) fn validate_positional(
    context: &mut ValidationContext<'_>,
    subschemas: &[Value],
    items: &[Value],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (index, (item, subschema)) in items.iter().zip(subschemas.iter()).enumerate() {
        context.push_keyword(index);
        context.push_instance(index);
        errors.extend(descend(context, item, subschema));
        context.pop_instance();
        context.pop_keyword();
    }
    errors
}
