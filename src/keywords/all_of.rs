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
    match schema {
        Value::Array(subschemas) => {
            let mut errors = Vec::new();
            for (index, subschema) in subschemas.iter().enumerate() {
                context.push_keyword(index);
                errors.extend(descend(context, instance, subschema));
                context.pop_keyword();
            }
            errors
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
