//! The validation driver: owns the dispatch table and the reference index,
//! and walks instances against schemas.
use crate::{
    context::ValidationContext,
    error::{SchemaError, ValidationError, ValidationErrorKind},
    keywords,
    paths::JsonPointer,
    resolver::{Resolver, DOCUMENT_PROTOCOL},
    schemas::{self, Dialect, Draft},
};
use serde_json::Value;
use url::Url;

/// A reusable validator for one schema document.
///
/// Construction selects the dialect and builds the reference index; nothing
/// is mutated afterwards, so a validator can be shared freely between
/// threads, with each [`Validator::validate`] call getting its own transient
/// state.
#[derive(Debug)]
pub struct Validator<'a> {
    schema: &'a Value,
    dialect: Dialect,
    resolver: Resolver,
    scope: Url,
}

impl<'a> Validator<'a> {
    /// Build a validator. The dialect is selected through the `$schema`
    /// member when it holds a recognised meta-schema URL, and defaults to
    /// draft 4.
    pub fn new(schema: &'a Value) -> Result<Validator<'a>, SchemaError> {
        let draft = schemas::draft_from_schema(schema).unwrap_or(Draft::Draft4);
        Validator::with_dialect(schema, Dialect::standard(draft))
    }

    /// Build a validator that applies the lenient, null-permissive overrides
    /// on top of the draft 7 keyword table.
    pub fn lenient(schema: &'a Value) -> Result<Validator<'a>, SchemaError> {
        Validator::with_dialect(schema, Dialect::lenient())
    }

    fn with_dialect(schema: &'a Value, dialect: Dialect) -> Result<Validator<'a>, SchemaError> {
        let document = Url::parse(DOCUMENT_PROTOCOL).expect("Always valid");
        let scope = match schemas::id_of(dialect.draft(), schema) {
            Some(id) => Url::options().base_url(Some(&document)).parse(id)?,
            None => document,
        };
        let resolver = Resolver::new(dialect.draft(), &scope, schema)?;
        Ok(Validator {
            schema,
            dialect,
            resolver,
            scope,
        })
    }

    /// Validate `instance`, collecting every violation in document order.
    #[must_use]
    pub fn validate(&self, instance: &Value) -> ValidationResult {
        let mut context = ValidationContext::new(
            self.schema,
            &self.resolver,
            self.dialect,
            self.scope.clone(),
        );
        let errors = descend(&mut context, instance, self.schema);
        debug_assert!(context.is_balanced());
        ValidationResult { errors }
    }

    /// Validate and only report whether the instance conforms.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_valid()
    }
}

/// The outcome of one [`Validator::validate`] call.
#[derive(Debug)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// `true` iff no violation was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded violations, in document order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consume the result, keeping the violations.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub(crate) fn from_schema_error(_: &SchemaError) -> ValidationResult {
        ValidationResult {
            errors: vec![ValidationError {
                instance: Value::Null,
                kind: ValidationErrorKind::Schema,
                instance_path: JsonPointer::default(),
                schema_path: JsonPointer::default(),
            }],
        }
    }
}

/// Walk one (instance, subschema) pair, dispatching every registered keyword
/// of the subschema in document order. Unknown keywords are ignored.
pub(crate) fn descend(
    context: &mut ValidationContext<'_>,
    instance: &Value,
    schema: &Value,
) -> Vec<ValidationError> {
    match schema {
        Value::Bool(true) => Vec::new(),
        Value::Bool(false) => vec![context.error(instance, ValidationErrorKind::FalseSchema)],
        Value::Object(object) => {
            let scoped = match schemas::id_of(context.dialect.draft(), schema) {
                // Anchors were checked during construction; an unparseable one
                // cannot reach this point.
                Some(id) => match context.build_url(id) {
                    Ok(scope) => {
                        context.push_scope(scope);
                        true
                    }
                    Err(_) => false,
                },
                None => false,
            };
            let mut errors = Vec::new();
            if context.dialect.draft().ref_suppresses_siblings() && object.contains_key("$ref") {
                let reference = &object["$ref"];
                context.push_keyword("$ref");
                errors.extend(keywords::ref_::validate(context, reference, instance, object));
                context.pop_keyword();
            } else {
                for (keyword, value) in object {
                    if let Some(validate) = context.dialect.get_keyword(keyword) {
                        context.push_keyword(keyword.as_str());
                        errors.extend(validate(context, value, instance, object));
                        context.pop_keyword();
                    }
                }
            }
            if scoped {
                context.pop_scope();
            }
            errors
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}
