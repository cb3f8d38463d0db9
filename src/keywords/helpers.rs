use num_cmp::NumCmp;
use serde_json::{Map, Number, Value};

macro_rules! num_cmp {
    ($left:expr, $right:expr, $op:ident) => {
        if let Some(b) = $right.as_u64() {
            NumCmp::$op($left, b)
        } else if let Some(b) = $right.as_i64() {
            NumCmp::$op($left, b)
        } else {
            NumCmp::$op($left, $right.as_f64().expect("Always valid"))
        }
    };
}

macro_rules! number_op {
    ($name:ident) => {
        #[inline]
        pub(crate) fn $name(left: &Number, right: &Number) -> bool {
            if let Some(a) = left.as_u64() {
                num_cmp!(a, right, $name)
            } else if let Some(a) = left.as_i64() {
                num_cmp!(a, right, $name)
            } else {
                let a = left.as_f64().expect("Always valid");
                num_cmp!(a, right, $name)
            }
        }
    };
}

// Comparison by mathematical value, exact across u64 / i64 / f64
// representations.
number_op!(num_eq);
number_op!(num_lt);
number_op!(num_le);
number_op!(num_gt);
number_op!(num_ge);

/// Whether the number has a mathematically integral value, whatever its
/// representation.
#[inline]
pub(crate) fn is_integer(number: &Number) -> bool {
    number.is_u64()
        || number.is_i64()
        || number.as_f64().map_or(false, |value| value.fract() == 0.)
}

/// Deep equality: same JSON type, same contents recursively, numbers by
/// mathematical value (`1 == 1.0`), objects regardless of member order.
#[inline]
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => num_eq(left, right),
        (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
        (_, _) => left == right,
    }
}

#[inline]
pub(crate) fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| equal(a, b))
}

#[inline]
pub(crate) fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, value)| right.get(key).map_or(false, |other| equal(value, other)))
}
