//! Error types.
use crate::{paths::JsonPointer, primitive_type::PrimitiveType};
use serde_json::Value;
use std::{
    error,
    fmt::{self, Formatter},
};

/// The error type for schemas that cannot be prepared for validation at all,
/// e.g. an identifier anchor that is not a parseable URI reference.
///
/// Missing reference targets are not construction failures: they surface as
/// validation errors when a `$ref` tries to follow them.
#[derive(Debug, PartialEq)]
pub enum SchemaError {
    /// An `$id`/`id` anchor is not a valid URI reference.
    InvalidUrl(url::ParseError),
}

impl error::Error for SchemaError {}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::InvalidUrl(error) => {
                write!(f, "schema contains an unparseable identifier: {}", error)
            }
        }
    }
}

impl From<url::ParseError> for SchemaError {
    #[inline]
    fn from(error: url::ParseError) -> Self {
        SchemaError::InvalidUrl(error)
    }
}

/// An error that occurred during validation.
///
/// Errors are value types: once recorded they are never modified, and they
/// carry snapshots of both locations involved.
#[derive(Debug)]
pub struct ValidationError {
    /// Value of the instance location that failed validation.
    pub instance: Value,
    /// Type of validation error.
    pub kind: ValidationErrorKind,
    /// Path to the value that failed validation.
    pub instance_path: JsonPointer,
    /// Path to the JSON Schema keyword that failed validation.
    pub schema_path: JsonPointer,
}

/// Kinds of errors that may happen during validation.
#[derive(Debug)]
pub enum ValidationErrorKind {
    /// The input array contains more items than `items` describes.
    AdditionalItems {
        /// How many leading items are covered by `items`.
        limit: usize,
    },
    /// Properties not described by `properties` or `patternProperties` are
    /// not allowed.
    AdditionalProperties {
        /// The offending property names, sorted.
        unexpected: Vec<String>,
    },
    /// The input value is not valid under any of the given schemas.
    AnyOf,
    /// The input value doesn't match the expected constant.
    Constant {
        /// The only accepted value.
        expected_value: Value,
    },
    /// The input array doesn't contain items conforming to the specified
    /// schema.
    Contains,
    /// The input value is not encoded as expected.
    ContentEncoding {
        /// The expected content encoding.
        content_encoding: String,
    },
    /// The input value is not of the expected media type.
    ContentMediaType {
        /// The expected media type.
        content_media_type: String,
    },
    /// The input value doesn't match any of the enumerated options.
    Enum {
        /// The accepted values.
        options: Value,
    },
    /// Value is too large.
    ExclusiveMaximum {
        /// The excluded upper bound.
        limit: f64,
    },
    /// Value is too small.
    ExclusiveMinimum {
        /// The excluded lower bound.
        limit: f64,
    },
    /// Everything is invalid for a `false` schema.
    FalseSchema,
    /// The input doesn't match the expected format.
    Format {
        /// The expected format name.
        format: String,
    },
    /// A pattern in the schema is not a valid regular expression.
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
    },
    /// A reference addresses nothing within the document.
    InvalidReference {
        /// The reference as written in the schema.
        reference: String,
    },
    /// Too many items in an array.
    MaxItems {
        /// The inclusive item count bound.
        limit: u64,
    },
    /// Value is too large.
    Maximum {
        /// The inclusive upper bound.
        limit: f64,
    },
    /// String is too long.
    MaxLength {
        /// The inclusive length bound, in code points.
        limit: u64,
    },
    /// Too many properties in an object.
    MaxProperties {
        /// The inclusive property count bound.
        limit: u64,
    },
    /// Too few items in an array.
    MinItems {
        /// The inclusive item count bound.
        limit: u64,
    },
    /// Value is too small.
    Minimum {
        /// The inclusive lower bound.
        limit: f64,
    },
    /// String is too short.
    MinLength {
        /// The inclusive length bound, in code points.
        limit: u64,
    },
    /// Not enough properties in an object.
    MinProperties {
        /// The inclusive property count bound.
        limit: u64,
    },
    /// The number is not a multiple of the divisor.
    MultipleOf {
        /// The required divisor.
        multiple_of: f64,
    },
    /// The negated schema accepted the value.
    Not {
        /// The negated schema.
        schema: Value,
    },
    /// The input value is valid under more than one of the given schemas.
    OneOfMultipleValid,
    /// The input value is not valid under any of the given schemas.
    OneOfNotValid,
    /// The input doesn't match the pattern.
    Pattern {
        /// The expected pattern.
        pattern: String,
    },
    /// A reference points to another document, which is never fetched.
    RemoteReference {
        /// The composed reference URL.
        reference: String,
    },
    /// One or several required properties are missing.
    Required {
        /// The missing property names, in declaration order.
        properties: Vec<String>,
    },
    /// The schema itself is malformed at this location.
    Schema,
    /// The input value doesn't match one or several required types.
    Type {
        /// The expected types.
        kind: TypeKind,
    },
    /// The input array has non-unique elements.
    UniqueItems,
    /// The keyword belongs to a newer dialect subset that is not implemented.
    Unsupported {
        /// The unsupported keyword.
        keyword: String,
    },
}

/// One or several expected primitive types.
#[derive(Debug)]
pub enum TypeKind {
    /// A single type name.
    Single(PrimitiveType),
    /// An array of type names; matching any of them suffices.
    Multiple(Vec<PrimitiveType>),
}

impl error::Error for ValidationError {}

/// Textual representation of various validation errors.
impl fmt::Display for ValidationError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::Schema => write!(f, "Schema error"),
            ValidationErrorKind::AdditionalItems { limit } => {
                if let Value::Array(items) = &self.instance {
                    let extras: Vec<String> =
                        items.iter().skip(*limit).map(Value::to_string).collect();
                    let verb = if extras.len() == 1 { "was" } else { "were" };
                    write!(
                        f,
                        "Additional items are not allowed ({} {} unexpected)",
                        extras.join(", "),
                        verb
                    )
                } else {
                    write!(f, "Additional items are not allowed")
                }
            }
            ValidationErrorKind::AdditionalProperties { unexpected } => {
                let verb = if unexpected.len() == 1 { "was" } else { "were" };
                write!(
                    f,
                    "Additional properties are not allowed ({} {} unexpected)",
                    unexpected
                        .iter()
                        .map(|property| format!("'{}'", property))
                        .collect::<Vec<String>>()
                        .join(", "),
                    verb
                )
            }
            ValidationErrorKind::AnyOf | ValidationErrorKind::OneOfNotValid => write!(
                f,
                "'{}' is not valid under any of the given schemas",
                self.instance
            ),
            ValidationErrorKind::Constant { expected_value } => {
                write!(f, "'{}' was expected", expected_value)
            }
            ValidationErrorKind::Contains => write!(
                f,
                "None of '{}' are valid under the given schema",
                self.instance
            ),
            ValidationErrorKind::ContentEncoding { content_encoding } => {
                write!(f, "'{}' is not encoded as '{}'", self.instance, content_encoding)
            }
            ValidationErrorKind::ContentMediaType { content_media_type } => write!(
                f,
                "'{}' is not of media type '{}'",
                self.instance, content_media_type
            ),
            ValidationErrorKind::Enum { options } => {
                write!(f, "'{}' is not one of '{}'", self.instance, options)
            }
            ValidationErrorKind::ExclusiveMaximum { limit } => write!(
                f,
                "{} is greater than or equal to the maximum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::ExclusiveMinimum { limit } => write!(
                f,
                "{} is less than or equal to the minimum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::FalseSchema => {
                write!(f, "False schema does not allow '{}'", self.instance)
            }
            ValidationErrorKind::Format { format } => {
                write!(f, "'{}' is not a '{}'", self.instance, format)
            }
            ValidationErrorKind::InvalidPattern { pattern } => {
                write!(f, "'{}' is not a valid regular expression", pattern)
            }
            ValidationErrorKind::InvalidReference { reference } => {
                write!(f, "Invalid reference: {}", reference)
            }
            ValidationErrorKind::Maximum { limit } => {
                write!(f, "{} is greater than the maximum of {}", self.instance, limit)
            }
            ValidationErrorKind::MaxItems { limit } => {
                write!(f, "{} has more than {} items", self.instance, limit)
            }
            ValidationErrorKind::MaxLength { limit } => {
                write!(f, "'{}' is longer than {} characters", self.instance, limit)
            }
            ValidationErrorKind::MaxProperties { limit } => {
                write!(f, "{} has more than {} properties", self.instance, limit)
            }
            ValidationErrorKind::Minimum { limit } => {
                write!(f, "{} is less than the minimum of {}", self.instance, limit)
            }
            ValidationErrorKind::MinItems { limit } => {
                let noun = if *limit == 1 { "item" } else { "items" };
                write!(f, "{} has less than {} {}", self.instance, limit, noun)
            }
            ValidationErrorKind::MinLength { limit } => {
                write!(f, "'{}' is shorter than {} characters", self.instance, limit)
            }
            ValidationErrorKind::MinProperties { limit } => {
                let noun = if *limit == 1 { "property" } else { "properties" };
                write!(f, "{} has less than {} {}", self.instance, limit, noun)
            }
            ValidationErrorKind::MultipleOf { multiple_of } => {
                write!(f, "{} is not a multiple of {}", self.instance, multiple_of)
            }
            ValidationErrorKind::Not { schema } => {
                write!(f, "{} is not allowed for {}", schema, self.instance)
            }
            ValidationErrorKind::OneOfMultipleValid => write!(
                f,
                "'{}' is valid under more than one of the given schemas",
                self.instance
            ),
            ValidationErrorKind::Pattern { pattern } => {
                write!(f, "'{}' does not match '{}'", self.instance, pattern)
            }
            ValidationErrorKind::RemoteReference { reference } => {
                write!(f, "Remote reference is not supported: {}", reference)
            }
            ValidationErrorKind::Required { properties } => {
                if let [property] = properties.as_slice() {
                    write!(f, "'{}' is a required property", property)
                } else {
                    write!(
                        f,
                        "{} are required properties",
                        properties
                            .iter()
                            .map(|property| format!("'{}'", property))
                            .collect::<Vec<String>>()
                            .join(", ")
                    )
                }
            }
            ValidationErrorKind::Type { kind } => match kind {
                TypeKind::Single(type_) => {
                    write!(f, "'{}' is not of type '{}'", self.instance, type_)
                }
                TypeKind::Multiple(types) => write!(
                    f,
                    "'{}' is not of types '{}'",
                    self.instance,
                    types
                        .iter()
                        .map(PrimitiveType::to_string)
                        .collect::<Vec<String>>()
                        .join(", ")
                ),
            },
            ValidationErrorKind::UniqueItems => {
                write!(f, "'{}' has non-unique elements", self.instance)
            }
            ValidationErrorKind::Unsupported { keyword } => {
                write!(f, "'{}' is not supported", keyword)
            }
        }
    }
}
