use crate::{
    context::ValidationContext,
    error::{TypeKind, ValidationError, ValidationErrorKind},
    keywords::helpers,
    primitive_type::PrimitiveType,
};
use serde_json::{Map, Value};
use std::convert::TryFrom;

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match schema {
        Value::String(name) => match PrimitiveType::try_from(name.as_str()) {
            Ok(expected) if matches_type(instance, expected) => Vec::new(),
            Ok(expected) => vec![context.error(
                instance,
                ValidationErrorKind::Type {
                    kind: TypeKind::Single(expected),
                },
            )],
            Err(()) => vec![context.error(instance, ValidationErrorKind::Schema)],
        },
        Value::Array(names) => {
            let mut expected = Vec::with_capacity(names.len());
            for name in names {
                match name.as_str().map(PrimitiveType::try_from) {
                    Some(Ok(primitive_type)) => expected.push(primitive_type),
                    _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
                }
            }
            if expected
                .iter()
                .any(|primitive_type| matches_type(instance, *primitive_type))
            {
                Vec::new()
            } else {
                vec![context.error(
                    instance,
                    ValidationErrorKind::Type {
                        kind: TypeKind::Multiple(expected),
                    },
                )]
            }
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

/// `integer` accepts any number with a mathematically integral value, so
/// `1.0` qualifies.
pub(crate) fn matches_type(instance: &Value, expected: PrimitiveType) -> bool {
    match expected {
        PrimitiveType::Array => instance.is_array(),
        PrimitiveType::Boolean => instance.is_boolean(),
        PrimitiveType::Integer => match instance {
            Value::Number(number) => helpers::is_integer(number),
            _ => false,
        },
        PrimitiveType::Null => instance.is_null(),
        PrimitiveType::Number => instance.is_number(),
        PrimitiveType::Object => instance.is_object(),
        PrimitiveType::String => instance.is_string(),
    }
}
