use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
};
use serde_json::{Map, Value};

/// Registered for 2019-09/2020-12 constructs outside the implemented subset
/// (`unevaluatedProperties`, `unevaluatedItems`, `$recursiveRef`,
/// `$dynamicRef`): one error at the keyword location, and the rest of the
/// document keeps validating.
pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    _schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let keyword = context.current_keyword().unwrap_or_default().to_string();
    vec![context.error(instance, ValidationErrorKind::Unsupported { keyword })]
}
