use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    validator::descend,
};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Instance keys not named under `properties` and not matched by any
/// `patternProperties` pattern of the enclosing schema.
pub(crate) fn find_additional_properties<'i>(
    instance: &'i Map<String, Value>,
    parent: &Map<String, Value>,
) -> Vec<&'i str> {
    let properties = parent.get("properties").and_then(Value::as_object);
    let patterns: Vec<Regex> = parent
        .get("patternProperties")
        .and_then(Value::as_object)
        .map(|patterns| {
            patterns
                .keys()
                .filter_map(|pattern| Regex::new(pattern).ok())
                .collect()
        })
        .unwrap_or_default();
    instance
        .keys()
        .filter(|name| {
            !properties.map_or(false, |properties| properties.contains_key(name.as_str()))
        })
        .filter(|name| !patterns.iter().any(|re| re.is_match(name)))
        .map(String::as_str)
        .collect()
}

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let items = match instance {
        Value::Object(items) => items,
        _ => return Vec::new(),
    };
    match schema {
        Value::Bool(true) => Vec::new(),
        Value::Bool(false) => {
            let unexpected: BTreeSet<&str> =
                find_additional_properties(items, parent).into_iter().collect();
            if unexpected.is_empty() {
                Vec::new()
            } else {
                vec![context.error(
                    instance,
                    ValidationErrorKind::AdditionalProperties {
                        unexpected: unexpected
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                    },
                )]
            }
        }
        Value::Object(_) => {
            let mut errors = Vec::new();
            for name in find_additional_properties(items, parent) {
                context.push_instance(name);
                errors.extend(descend(context, &items[name], schema));
                context.pop_instance();
            }
            errors
        }
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"additionalProperties": false}), json!({}))]
    #[test_case(json!({"additionalProperties": false, "properties": {"foo": {}}}), json!({"foo": 1}))]
    #[test_case(
        json!({"additionalProperties": false, "patternProperties": {"^v": {}}}),
        json!({"vroom": 1})
    )]
    #[test_case(json!({"additionalProperties": {"type": "string"}}), json!({"foo": "bar"}))]
    #[test_case(
        json!({"additionalProperties": {"type": "string"}, "properties": {"n": {}}}),
        json!({"n": 1, "extra": "ok"})
    )]
    #[test_case(json!({"additionalProperties": false}), json!("not an object"))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"additionalProperties": false}), json!({"foo": 1}))]
    #[test_case(
        json!({"additionalProperties": false, "properties": {"foo": {}}, "patternProperties": {"^v": {}}}),
        json!({"foo": 1, "vroom": 2, "quux": 3})
    )]
    #[test_case(json!({"additionalProperties": {"type": "string"}}), json!({"foo": 1}))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }

    #[test]
    fn extras_are_reported_sorted_in_one_error() {
        let schema = json!({"additionalProperties": false, "properties": {"a": {}}});
        let result = crate::validate(&json!({"z": 1, "a": 2, "b": 3}), &schema);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].to_string(),
            "Additional properties are not allowed ('b', 'z' were unexpected)"
        );
        assert_eq!(
            result.errors()[0].schema_path.to_string(),
            "/additionalProperties"
        );
    }
}
