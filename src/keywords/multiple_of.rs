use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
};
use fraction::{BigFraction, BigUint};
use serde_json::{Map, Number, Value};
use std::str::FromStr;

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::Number(multiple_of), Value::Number(item)) => {
            if is_multiple_of(item, multiple_of) {
                Vec::new()
            } else {
                vec![context.error(
                    instance,
                    ValidationErrorKind::MultipleOf {
                        multiple_of: multiple_of.as_f64().expect("Always valid"),
                    },
                )]
            }
        }
        (Value::Number(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

fn is_multiple_of(item: &Number, multiple_of: &Number) -> bool {
    let value = item.as_f64().expect("Always valid");
    let divisor = multiple_of.as_f64().expect("Always valid");
    if divisor.fract() == 0. {
        // An integral divisor can only divide an integral value.
        value.fract() == 0. && (value % divisor) == 0.
    } else {
        // Decimal divisors go through exact decimal arithmetic on the
        // shortest decimal rendering of both operands: 0.3 is a multiple of
        // 0.1 even though the ratio of their binary approximations is not
        // integral.
        match (
            BigFraction::from_str(&item.to_string()),
            BigFraction::from_str(&multiple_of.to_string()),
        ) {
            (Ok(value), Ok(divisor)) => {
                let ratio = value / divisor;
                ratio
                    .denom()
                    .map_or(true, |denom| denom == &BigUint::from(1_u8))
            }
            // Scientific notation falls back to binary arithmetic.
            _ => (value / divisor).fract() == 0.,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"multipleOf": 2}), json!(4); "multiple_of_2_of_4")]
    #[test_case(json!({"multipleOf": 2}), json!(-4); "multiple_of_2_of_neg_4")]
    #[test_case(json!({"multipleOf": 1.0}), json!(4.0); "multiple_of_1_0_of_4_0")]
    #[test_case(json!({"multipleOf": 1.5}), json!(4.5); "multiple_of_1_5_of_4_5")]
    #[test_case(json!({"multipleOf": 0.1}), json!(0.3); "multiple_of_0_1_of_0_3")]
    #[test_case(json!({"multipleOf": 0.1}), json!(1.1); "multiple_of_0_1_of_1_1")]
    #[test_case(json!({"multipleOf": 0.02}), json!(1.02); "multiple_of_0_02_of_1_02")]
    #[test_case(json!({"multipleOf": 2}), json!("not a number"); "multiple_of_2_of_not_a_number")]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"multipleOf": 2}), json!(7))]
    #[test_case(json!({"multipleOf": 1.0}), json!(4.5))]
    #[test_case(json!({"multipleOf": 0.1}), json!(4.55))]
    #[test_case(json!({"multipleOf": 0.2}), json!(4.5))]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
