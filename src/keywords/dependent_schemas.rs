use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    validator::descend,
};
use serde_json::{Map, Value};

/// The 2019-09 split of the schema form of `dependencies`.
pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let dependent = match schema {
        Value::Object(dependent) => dependent,
        _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
    };
    let items = match instance {
        Value::Object(items) => items,
        _ => return Vec::new(),
    };
    let mut errors = Vec::new();
    for (name, subschema) in dependent {
        if !items.contains_key(name) {
            continue;
        }
        context.push_keyword(name.as_str());
        errors.extend(descend(context, instance, subschema));
        context.pop_keyword();
    }
    errors
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    const DRAFT201909: &str = "https://json-schema.org/draft/2019-09/schema";

    #[test]
    fn applies_only_when_the_trigger_is_present() {
        let schema = json!({
            "$schema": DRAFT201909,
            "dependentSchemas": {"bar": {"required": ["foo"]}}
        });
        tests_util::is_valid(&schema, &json!({"foo": 1, "bar": 2}));
        tests_util::is_valid(&schema, &json!({"baz": 1}));
        tests_util::is_not_valid(&schema, &json!({"bar": 2}));
    }
}
