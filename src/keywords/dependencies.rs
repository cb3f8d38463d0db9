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
    let dependencies = match schema {
        Value::Object(dependencies) => dependencies,
        _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
    };
    let items = match instance {
        Value::Object(items) => items,
        _ => return Vec::new(),
    };
    let mut errors = Vec::new();
    for (name, dependency) in dependencies {
        if !items.contains_key(name) {
            continue;
        }
        context.push_keyword(name.as_str());
        match dependency {
            Value::Array(names) => {
                errors.extend(require_names(context, names, items, instance));
            }
            _ => errors.extend(descend(context, instance, dependency)),
        }
        context.pop_keyword();
    }
    errors
}

/// The array form: every listed property must accompany the trigger.
pub(crate) fn require_names(
    context: &ValidationContext<'_>,
    names: &[Value],
    items: &Map<String, Value>,
    instance: &Value,
) -> Vec<ValidationError> {
    let mut missing = Vec::new();
    for name in names {
        match name {
            Value::String(name) => {
                if !items.contains_key(name) {
                    missing.push(name.clone());
                }
            }
            _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
        }
    }
    if missing.is_empty() {
        Vec::new()
    } else {
        vec![context.error(
            instance,
            ValidationErrorKind::Required {
                properties: missing,
            },
        )]
    }
}
