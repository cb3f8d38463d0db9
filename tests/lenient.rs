use jsonschema_lite::{custom_validate, validate, Validator};
use serde_json::{json, Value};

fn nutrition_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "Sodium": {"type": "integer"},
            "Carbohydrate": {"type": "string", "enum": ["Low", "High"]}
        },
        "required": ["Sodium"],
        "additionalProperties": false
    })
}

#[test]
fn null_members_are_tolerated() {
    let instance = json!({"Sodium": 140, "Carbohydrate": null});
    assert!(!validate(&instance, &nutrition_schema()).is_valid());
    assert!(custom_validate(&instance, &nutrition_schema()).is_valid());
}

#[test]
fn extra_properties_are_still_rejected() {
    let instance = json!({"Sodium": 140, "ExtraField": "x"});
    let result = custom_validate(&instance, &nutrition_schema());
    assert!(!result.is_valid());
    assert_eq!(result.errors()[0].schema_path.to_string(), "/additionalProperties");
    assert!(result.errors()[0].to_string().contains("ExtraField"));
}

#[test]
fn pinned_booleans_are_not_enforced() {
    let schema = json!({
        "properties": {"a": {"const": true}},
        "allOf": [{"properties": {"a": {"const": true}}}]
    });
    let instance = json!({"a": false});
    assert!(!validate(&instance, &schema).is_valid());
    assert!(custom_validate(&instance, &schema).is_valid());
}

#[test]
fn null_instances_pass_the_relaxed_keywords() {
    for schema in [
        json!({"type": "object"}),
        json!({"enum": [1, 2, 3]}),
        json!({"properties": {"a": {"type": "string"}}}),
        json!({"additionalProperties": false}),
    ] {
        assert!(custom_validate(&json!(null), &schema).is_valid());
    }
}

#[test]
fn relaxation_is_limited_to_the_six_overrides() {
    // Null is only forgiven where the overlay says so.
    assert!(!custom_validate(&json!(null), &json!({"const": 1})).is_valid());
    assert!(!custom_validate(&json!({}), &json!({"required": ["a"]})).is_valid());
    assert!(!custom_validate(&json!(1), &json!({"minimum": 5})).is_valid());
    assert!(!custom_validate(&json!([1, 1]), &json!({"uniqueItems": true})).is_valid());
    assert!(!custom_validate(&json!("abc"), &json!({"maxLength": 2})).is_valid());
}

#[test]
fn lenient_accepts_a_superset() {
    let fixtures = [
        (nutrition_schema(), json!({"Sodium": 140, "Carbohydrate": "Low"})),
        (nutrition_schema(), json!({"Sodium": 140, "Carbohydrate": null})),
        (nutrition_schema(), json!({"Sodium": null})),
        (nutrition_schema(), json!({"Carbohydrate": "Medium"})),
        (nutrition_schema(), json!({"Sodium": 140, "Extra": 1})),
        (json!({"type": "string"}), json!(null)),
        (json!({"type": "string"}), json!(1)),
        (json!({"const": true}), json!(false)),
        (json!({"minimum": 5}), json!(1)),
        (json!({"items": {"type": "integer"}}), json!([1, "x"])),
    ];
    for (schema, instance) in fixtures {
        // Everything draft 7 accepts, the lenient variant accepts too.
        let schema = match schema {
            Value::Object(mut object) => {
                object.insert(
                    "$schema".to_string(),
                    json!("http://json-schema.org/draft-07/schema#"),
                );
                Value::Object(object)
            }
            other => other,
        };
        if validate(&instance, &schema).is_valid() {
            assert!(
                custom_validate(&instance, &schema).is_valid(),
                "lenient validation rejected {} under {}",
                instance,
                schema
            );
        }
    }
}

#[test]
fn lenient_validator_is_reusable() {
    let schema = nutrition_schema();
    let validator = Validator::lenient(&schema).unwrap();
    assert!(validator.is_valid(&json!({"Sodium": 140, "Carbohydrate": null})));
    assert!(!validator.is_valid(&json!({"Sodium": "x"})));
}
