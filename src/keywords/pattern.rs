use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
};
use regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::String(pattern), Value::String(item)) => match Regex::new(pattern) {
            // The pattern is searched for anywhere in the string, not
            // anchored.
            Ok(re) if re.is_match(item) => Vec::new(),
            Ok(_) => vec![context.error(
                instance,
                ValidationErrorKind::Pattern {
                    pattern: pattern.clone(),
                },
            )],
            Err(_) => vec![context.error(
                instance,
                ValidationErrorKind::InvalidPattern {
                    pattern: pattern.clone(),
                },
            )],
        },
        (Value::String(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
