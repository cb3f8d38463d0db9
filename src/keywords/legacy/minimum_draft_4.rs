//! Docs: <https://tools.ietf.org/html/draft-fge-json-schema-validation-00#section-5.1.3>
use crate::{
    context::ValidationContext,
    error::ValidationError,
    keywords::{exclusive_minimum, minimum},
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    // The value of "minimum" MUST be a JSON number.
    // The value of "exclusiveMinimum" MUST be a boolean.
    if let Some(Value::Bool(true)) = parent.get("exclusiveMinimum") {
        exclusive_minimum::validate(context, schema, instance, parent)
    } else {
        // "exclusiveMinimum", if absent, may be considered as being present
        // with boolean value false
        minimum::validate(context, schema, instance, parent)
    }
}
