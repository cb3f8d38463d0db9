use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    validator::descend,
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
        (Value::Object(patterns), Value::Object(items)) => {
            let mut errors = Vec::new();
            for (pattern, subschema) in patterns {
                context.push_keyword(pattern.as_str());
                match Regex::new(pattern) {
                    Ok(re) => {
                        for (name, item) in items {
                            if re.is_match(name) {
                                context.push_instance(name.as_str());
                                errors.extend(descend(context, item, subschema));
                                context.pop_instance();
                            }
                        }
                    }
                    Err(_) => errors.push(context.error(
                        instance,
                        ValidationErrorKind::InvalidPattern {
                            pattern: pattern.clone(),
                        },
                    )),
                }
                context.pop_keyword();
            }
            errors
        }
        (Value::Object(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
