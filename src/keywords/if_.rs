use crate::{
    context::ValidationContext,
    error::ValidationError,
    validator::descend,
};
use serde_json::{Map, Value};

/// Dispatched on `if`; `then` and `else` are read from the enclosing schema
/// and never dispatched on their own.
pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let then = parent.get("then");
    let else_ = parent.get("else");
    if then.is_none() && else_.is_none() {
        // `if` alone asserts nothing.
        return Vec::new();
    }
    // The condition's own errors are discarded.
    let passed = descend(context, instance, schema).is_empty();
    let (keyword, branch) = if passed { ("then", then) } else { ("else", else_) };
    match branch {
        Some(subschema) => {
            // Report under the branch actually applied, not under `if`.
            context.pop_keyword();
            context.push_keyword(keyword);
            let errors = descend(context, instance, subschema);
            context.pop_keyword();
            context.push_keyword("if");
            errors
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    const DRAFT7: &str = "http://json-schema.org/draft-07/schema#";

    #[test_case(json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}, "then": {"minimum": -10}}), json!(-5))]
    #[test_case(json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}, "then": {"minimum": -10}}), json!(5); "condition fails, no else")]
    #[test_case(json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}, "else": {"multipleOf": 2}}), json!(4))]
    #[test_case(json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}}), json!(5); "if alone asserts nothing")]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}, "then": {"minimum": -10}}), json!(-100))]
    #[test_case(json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}, "else": {"multipleOf": 2}}), json!(3))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }

    #[test]
    fn errors_land_under_the_branch_taken() {
        tests_util::assert_keyword_location(
            &json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}, "then": {"minimum": -10}}),
            &json!(-100),
            "/then/minimum",
        );
        tests_util::assert_keyword_location(
            &json!({"$schema": DRAFT7, "if": {"exclusiveMaximum": 0}, "else": {"multipleOf": 2}}),
            &json!(3),
            "/else/multipleOf",
        );
    }
}
