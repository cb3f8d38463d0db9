use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    resolver::ResolveError,
    validator::descend,
};
use serde_json::{Map, Value};

/// Resolution is local only: the reference URL is composed against the
/// current `$id` scope and looked up in the index built at construction.
/// Remote documents and dangling pointers surface as validation errors.
pub(crate) fn validate<'a>(
    context: &mut ValidationContext<'a>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let reference = match schema {
        Value::String(reference) => reference,
        _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
    };
    let url = match context.build_url(reference) {
        Ok(url) => url,
        Err(_) => {
            return vec![context.error(
                instance,
                ValidationErrorKind::InvalidReference {
                    reference: reference.clone(),
                },
            )]
        }
    };
    let root = context.root;
    match context.resolver.resolve(root, &url) {
        Ok((target, scope)) => {
            if !context.mark_seen(target, instance) {
                // This (target, instance) pair is already on the stack: a
                // reference cycle. The repeated pair is treated as satisfied.
                return Vec::new();
            }
            context.push_scope(scope);
            let errors = descend(context, instance, target);
            context.pop_scope();
            context.unmark_seen(target, instance);
            errors
        }
        Err(ResolveError::Remote(reference)) => vec![context.error(
            instance,
            ValidationErrorKind::RemoteReference { reference },
        )],
        Err(ResolveError::Dangling(reference)) => vec![context.error(
            instance,
            ValidationErrorKind::InvalidReference { reference },
        )],
    }
}
