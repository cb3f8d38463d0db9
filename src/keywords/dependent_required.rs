use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::dependencies,
};
use serde_json::{Map, Value};

/// The 2019-09 split of the array form of `dependencies`.
pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let dependent = match schema {
        Value::Object(dependent) => dependent,
        _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
    };
    let items = match instance {
        Value::Object(items) => items,
        _ => return Vec::new(),
    };
    let mut errors = Vec::new();
    for (name, names) in dependent {
        if !items.contains_key(name) {
            continue;
        }
        context.push_keyword(name.as_str());
        match names {
            Value::Array(names) => {
                errors.extend(dependencies::require_names(context, names, items, instance));
            }
            _ => errors.push(context.error(instance, ValidationErrorKind::Schema)),
        }
        context.pop_keyword();
    }
    errors
}
