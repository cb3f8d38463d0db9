//! The null-permissive overrides layered over the draft 7 table.
//!
//! Exactly six entries are replaced: `properties`, `type`, `enum`, `const`,
//! `additionalProperties` and `allOf`. Every other keyword keeps its
//! standard behavior.
use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords,
    validator::descend,
};
use serde_json::{Map, Value};

/// `properties` that tolerates null: a null instance asserts nothing, and
/// null-valued members are skipped without descending.
pub(crate) fn properties(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    if instance.is_null() {
        return Vec::new();
    }
    match (schema, instance) {
        (Value::Object(properties), Value::Object(items)) => {
            let mut errors = Vec::new();
            for (name, item) in items {
                if item.is_null() {
                    continue;
                }
                if let Some(subschema) = properties.get(name) {
                    context.push_keyword(name.as_str());
                    context.push_instance(name.as_str());
                    errors.extend(descend(context, item, subschema));
                    context.pop_instance();
                    context.pop_keyword();
                }
            }
            errors
        }
        (Value::Object(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

/// A null instance passes every type assertion.
pub(crate) fn type_(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    if instance.is_null() {
        return Vec::new();
    }
    keywords::type_::validate(context, schema, instance, parent)
}

/// A null instance passes unconditionally.
pub(crate) fn enum_(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    if instance.is_null() {
        return Vec::new();
    }
    keywords::enum_::validate(context, schema, instance, parent)
}

/// `const: true` accepts any boolean instance, `false` included.
pub(crate) fn const_(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    if let (Value::Bool(true), Value::Bool(_)) = (schema, instance) {
        return Vec::new();
    }
    keywords::const_::validate(context, schema, instance, parent)
}

/// A null instance passes unconditionally; anything else gets the standard
/// behavior.
pub(crate) fn additional_properties(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    if instance.is_null() {
        return Vec::new();
    }
    keywords::additional_properties::validate(context, schema, instance, parent)
}

/// `allOf` that skips any branch whose `properties` pins a boolean with
/// `const: true` — the whole branch, not just the pinned member.
pub(crate) fn all_of(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match schema {
        Value::Array(subschemas) => {
            let mut errors = Vec::new();
            for (index, subschema) in subschemas.iter().enumerate() {
                if pins_boolean_constant(subschema) {
                    continue;
                }
                context.push_keyword(index);
                errors.extend(descend(context, instance, subschema));
                context.pop_keyword();
            }
            errors
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

fn pins_boolean_constant(subschema: &Value) -> bool {
    subschema
        .get("properties")
        .and_then(Value::as_object)
        .map_or(false, |properties| {
            properties
                .values()
                .any(|property| property.get("const") == Some(&Value::Bool(true)))
        })
}
