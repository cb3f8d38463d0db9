use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
};
use serde_json::{Map, Value};
use std::{
    collections::{hash_map::DefaultHasher, HashSet},
    hash::{Hash, Hasher},
};

// Based on the implementation proposed by Sven Marnach:
// https://stackoverflow.com/questions/60882381/what-is-the-fastest-correct-way-to-detect-that-there-are-no-duplicates-in-a-json
//
// Hashing and equality follow the mathematical-value rule for numbers, so
// `1` and `1.0` collide while `1` and `true` stay distinct.
pub(crate) struct HashedValue<'a>(&'a Value);

impl PartialEq for HashedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        helpers::equal(self.0, other.0)
    }
}

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u32(3_221_225_473), // chosen randomly
            Value::Bool(item) => item.hash(state),
            Value::Number(item) => hash_number(item, state),
            Value::String(item) => item.hash(state),
            Value::Array(items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(items) => {
                let mut hash = 0;
                for (key, value) in items {
                    // There is no way to build a new hasher of type `H`, so
                    // object members go through the default hasher. XOR keeps
                    // the combination independent of member order.
                    let mut item_hasher = DefaultHasher::default();
                    key.hash(&mut item_hasher);
                    HashedValue(value).hash(&mut item_hasher);
                    hash ^= item_hasher.finish();
                }
                state.write_u64(hash);
            }
        }
    }
}

// Integral values hash the same whatever their JSON representation was, to
// stay consistent with `helpers::equal`.
fn hash_number<H: Hasher>(item: &serde_json::Number, state: &mut H) {
    if let Some(number) = item.as_u64() {
        state.write_u64(number);
    } else if let Some(number) = item.as_i64() {
        state.write_i64(number);
    } else {
        let number = item.as_f64().expect("Always valid");
        if number.fract() == 0. && number >= 0. && number <= u64::MAX as f64 {
            state.write_u64(number as u64);
        } else if number.fract() == 0. && number < 0. && number >= i64::MIN as f64 {
            state.write_i64(number as i64);
        } else {
            state.write_u64(number.to_bits());
        }
    }
}

pub(crate) fn is_unique(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(HashedValue).all(move |item| seen.insert(item))
}

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::Bool(true), Value::Array(items)) => {
            if is_unique(items) {
                Vec::new()
            } else {
                vec![context.error(instance, ValidationErrorKind::UniqueItems)]
            }
        }
        (Value::Bool(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!([1, 2, 3]))]
    #[test_case(json!([1, true]); "number and boolean are distinct")]
    #[test_case(json!([0, false]))]
    #[test_case(json!([[1], [true]]))]
    #[test_case(json!([]))]
    #[test_case(json!("not an array"))]
    fn valid(instance: Value) {
        tests_util::is_valid(&json!({"uniqueItems": true}), &instance);
    }

    #[test_case(json!([1, 1]))]
    #[test_case(json!([1, 1.0]); "numbers compare by value")]
    #[test_case(json!([{"a": 1, "b": 2}, {"b": 2, "a": 1}]); "member order does not matter")]
    #[test_case(json!([[1.0], [1]]))]
    fn not_valid(instance: Value) {
        tests_util::is_not_valid(&json!({"uniqueItems": true}), &instance);
    }

    #[test]
    fn false_is_a_no_op() {
        tests_util::is_valid(&json!({"uniqueItems": false}), &json!([1, 1]));
    }
}
