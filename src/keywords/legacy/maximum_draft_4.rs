//! Docs: <https://tools.ietf.org/html/draft-fge-json-schema-validation-00#section-5.1.2>
use crate::{
    context::ValidationContext,
    error::ValidationError,
    keywords::{exclusive_maximum, maximum},
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    // The value of "maximum" MUST be a JSON number.
    // The value of "exclusiveMaximum" MUST be a boolean.
    if let Some(Value::Bool(true)) = parent.get("exclusiveMaximum") {
        exclusive_maximum::validate(context, schema, instance, parent)
    } else {
        maximum::validate(context, schema, instance, parent)
    }
}
