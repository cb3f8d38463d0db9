//! # jsonschema-lite
//!
//! A crate for performing JSON Schema validation by interpreting the schema
//! document directly. There is no compilation step: a [`Validator`] only
//! pre-computes the reference index, then walks the instance and the schema
//! together, collecting every violation with its exact location in both
//! documents.
//!
//! Supports JSON Schema drafts 4, 6 and 7 (selected through `$schema`,
//! defaulting to draft 4), a subset of drafts 2019-09 and 2020-12, and a
//! lenient, null-permissive variant of draft 7 exposed as
//! [`custom_validate`].
//!
//! ## Example:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"maxLength": 5});
//! let instance = json!("foobar");
//! let result = jsonschema_lite::validate(&instance, &schema);
//! for error in result.errors() {
//!     println!("Validation error: {}", error);
//! }
//! assert!(!result.is_valid());
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::trivially_copy_pass_by_ref,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
mod context;
mod error;
mod keywords;
mod paths;
mod primitive_type;
mod resolver;
mod schemas;
mod validator;

pub use error::{SchemaError, TypeKind, ValidationError, ValidationErrorKind};
pub use paths::JsonPointer;
pub use primitive_type::PrimitiveType;
pub use schemas::Draft;
pub use validator::{ValidationResult, Validator};

use serde_json::Value;

/// Validate `instance` against `schema` in one shot. The dialect is selected
/// through the `$schema` member and defaults to draft 4.
///
/// ```rust
/// use serde_json::json;
///
/// let schema = json!({"minLength": 5});
/// let instance = json!("foobar");
/// assert!(jsonschema_lite::validate(&instance, &schema).is_valid());
/// ```
#[must_use]
pub fn validate(instance: &Value, schema: &Value) -> ValidationResult {
    match Validator::new(schema) {
        Ok(validator) => validator.validate(instance),
        Err(error) => ValidationResult::from_schema_error(&error),
    }
}

/// Validate `instance` against `schema` with the lenient, null-permissive
/// overrides applied on top of the draft 7 keyword table.
///
/// Everything accepted by [`validate`] under draft 7 is accepted here too;
/// additionally null instances and null object members pass the relaxed
/// keywords, and booleans pinned with `const: true` are not enforced.
#[must_use]
pub fn custom_validate(instance: &Value, schema: &Value) -> ValidationResult {
    match Validator::lenient(schema) {
        Ok(validator) => validator.validate(instance),
        Err(error) => ValidationResult::from_schema_error(&error),
    }
}

/// A shortcut for checking whether `instance` conforms to `schema`.
///
/// ```rust
/// use serde_json::json;
///
/// assert!(jsonschema_lite::is_valid(&json!("foo"), &json!({"maxLength": 5})));
/// ```
#[must_use]
pub fn is_valid(instance: &Value, schema: &Value) -> bool {
    validate(instance, schema).is_valid()
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&valid, &schema));
        assert!(!is_valid(&invalid, &schema));
    }

    #[test]
    fn test_result_matches_errors() {
        let schema = json!({"type": "integer"});
        let result = validate(&json!("abc"), &schema);
        assert_eq!(result.is_valid(), result.errors().is_empty());
        assert_eq!(result.errors().len(), 1);
    }
}
