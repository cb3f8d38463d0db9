//! `contentEncoding` and `contentMediaType`. Only `base64` and
//! `application/json` are asserted; anything else is an annotation.
use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Value};

pub(crate) fn validate_encoding(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::String(encoding), Value::String(item)) => match encoding.as_str() {
            "base64" => {
                if STANDARD.decode(item).is_err() {
                    vec![context.error(
                        instance,
                        ValidationErrorKind::ContentEncoding {
                            content_encoding: encoding.clone(),
                        },
                    )]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        },
        (Value::String(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

pub(crate) fn validate_media_type(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    match (schema, instance) {
        (Value::String(media_type), Value::String(item)) => {
            if media_type != "application/json" {
                return Vec::new();
            }
            let decoded;
            let document = match parent.get("contentEncoding").and_then(Value::as_str) {
                Some("base64") => match STANDARD.decode(item) {
                    Ok(bytes) => match String::from_utf8(bytes) {
                        Ok(text) => {
                            decoded = text;
                            decoded.as_str()
                        }
                        // An undecodable payload is `contentEncoding`'s error.
                        Err(_) => return Vec::new(),
                    },
                    Err(_) => return Vec::new(),
                },
                _ => item.as_str(),
            };
            if serde_json::from_str::<Value>(document).is_err() {
                vec![context.error(
                    instance,
                    ValidationErrorKind::ContentMediaType {
                        content_media_type: media_type.clone(),
                    },
                )]
            } else {
                Vec::new()
            }
        }
        (Value::String(_), _) => Vec::new(),
        _ => vec![context.error(instance, ValidationErrorKind::Schema)],
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    const DRAFT7: &str = "http://json-schema.org/draft-07/schema#";

    #[test_case(json!({"$schema": DRAFT7, "contentEncoding": "base64"}), json!("eyJmb28iOiAiYmFyIn0="))]
    #[test_case(json!({"$schema": DRAFT7, "contentMediaType": "application/json"}), json!("{\"foo\": \"bar\"}"))]
    #[test_case(
        json!({"$schema": DRAFT7, "contentEncoding": "base64", "contentMediaType": "application/json"}),
        json!("eyJmb28iOiAiYmFyIn0=")
    )]
    #[test_case(json!({"$schema": DRAFT7, "contentMediaType": "application/json"}), json!(42); "non-strings are ignored")]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance);
    }

    #[test_case(json!({"$schema": DRAFT7, "contentEncoding": "base64"}), json!("not base64!"))]
    #[test_case(json!({"$schema": DRAFT7, "contentMediaType": "application/json"}), json!("{not json"))]
    #[test_case(
        json!({"$schema": DRAFT7, "contentEncoding": "base64", "contentMediaType": "application/json"}),
        json!("bm90IGpzb24=");
        "decodes, but is not JSON"
    )]
    fn not_valid(schema: Value, instance: Value) {
        tests_util::is_not_valid(&schema, &instance);
    }
}
