//! Supported dialects and their keyword dispatch tables.
use crate::keywords::{self, KeywordFn};
use serde_json::Value;

/// A revision of the JSON Schema specification.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Draft {
    /// `http://json-schema.org/draft-04/schema#`
    Draft4,
    /// `http://json-schema.org/draft-06/schema#`
    Draft6,
    /// `http://json-schema.org/draft-07/schema#`
    Draft7,
    /// `https://json-schema.org/draft/2019-09/schema` (partial coverage)
    Draft201909,
    /// `https://json-schema.org/draft/2020-12/schema` (partial coverage)
    Draft202012,
}

impl Draft {
    /// In drafts 4-7 a `$ref` member makes every sibling keyword inert.
    pub(crate) fn ref_suppresses_siblings(self) -> bool {
        matches!(self, Draft::Draft4 | Draft::Draft6 | Draft::Draft7)
    }

    pub(crate) fn get_keyword(self, keyword: &str) -> Option<KeywordFn> {
        match self {
            // `const` predates draft 6 here on purpose: schemas written for
            // the default dialect rely on it being enforced.
            Draft::Draft4 => match keyword {
                "additionalItems" => Some(keywords::additional_items::validate),
                "additionalProperties" => Some(keywords::additional_properties::validate),
                "allOf" => Some(keywords::all_of::validate),
                "anyOf" => Some(keywords::any_of::validate),
                "const" => Some(keywords::const_::validate),
                "dependencies" => Some(keywords::dependencies::validate),
                "enum" => Some(keywords::enum_::validate),
                "format" => Some(keywords::format::validate),
                "items" => Some(keywords::items::validate),
                "maximum" => Some(keywords::legacy::maximum_draft_4::validate),
                "maxItems" => Some(keywords::max_items::validate),
                "maxLength" => Some(keywords::max_length::validate),
                "maxProperties" => Some(keywords::max_properties::validate),
                "minimum" => Some(keywords::legacy::minimum_draft_4::validate),
                "minItems" => Some(keywords::min_items::validate),
                "minLength" => Some(keywords::min_length::validate),
                "minProperties" => Some(keywords::min_properties::validate),
                "multipleOf" => Some(keywords::multiple_of::validate),
                "not" => Some(keywords::not::validate),
                "oneOf" => Some(keywords::one_of::validate),
                "pattern" => Some(keywords::pattern::validate),
                "patternProperties" => Some(keywords::pattern_properties::validate),
                "properties" => Some(keywords::properties::validate),
                "required" => Some(keywords::required::validate),
                "type" => Some(keywords::type_::validate),
                "uniqueItems" => Some(keywords::unique_items::validate),
                _ => None,
            },
            Draft::Draft6 => match keyword {
                "additionalItems" => Some(keywords::additional_items::validate),
                "additionalProperties" => Some(keywords::additional_properties::validate),
                "allOf" => Some(keywords::all_of::validate),
                "anyOf" => Some(keywords::any_of::validate),
                "const" => Some(keywords::const_::validate),
                "contains" => Some(keywords::contains::validate),
                "dependencies" => Some(keywords::dependencies::validate),
                "enum" => Some(keywords::enum_::validate),
                "exclusiveMaximum" => Some(keywords::exclusive_maximum::validate),
                "exclusiveMinimum" => Some(keywords::exclusive_minimum::validate),
                "format" => Some(keywords::format::validate),
                "items" => Some(keywords::items::validate),
                "maximum" => Some(keywords::maximum::validate),
                "maxItems" => Some(keywords::max_items::validate),
                "maxLength" => Some(keywords::max_length::validate),
                "maxProperties" => Some(keywords::max_properties::validate),
                "minimum" => Some(keywords::minimum::validate),
                "minItems" => Some(keywords::min_items::validate),
                "minLength" => Some(keywords::min_length::validate),
                "minProperties" => Some(keywords::min_properties::validate),
                "multipleOf" => Some(keywords::multiple_of::validate),
                "not" => Some(keywords::not::validate),
                "oneOf" => Some(keywords::one_of::validate),
                "pattern" => Some(keywords::pattern::validate),
                "patternProperties" => Some(keywords::pattern_properties::validate),
                "properties" => Some(keywords::properties::validate),
                "propertyNames" => Some(keywords::property_names::validate),
                "required" => Some(keywords::required::validate),
                "type" => Some(keywords::type_::validate),
                "uniqueItems" => Some(keywords::unique_items::validate),
                _ => None,
            },
            Draft::Draft7 => match keyword {
                "additionalItems" => Some(keywords::additional_items::validate),
                "additionalProperties" => Some(keywords::additional_properties::validate),
                "allOf" => Some(keywords::all_of::validate),
                "anyOf" => Some(keywords::any_of::validate),
                "const" => Some(keywords::const_::validate),
                "contains" => Some(keywords::contains::validate),
                "contentEncoding" => Some(keywords::content::validate_encoding),
                "contentMediaType" => Some(keywords::content::validate_media_type),
                "dependencies" => Some(keywords::dependencies::validate),
                "enum" => Some(keywords::enum_::validate),
                "exclusiveMaximum" => Some(keywords::exclusive_maximum::validate),
                "exclusiveMinimum" => Some(keywords::exclusive_minimum::validate),
                "format" => Some(keywords::format::validate),
                "if" => Some(keywords::if_::validate),
                "items" => Some(keywords::items::validate),
                "maximum" => Some(keywords::maximum::validate),
                "maxItems" => Some(keywords::max_items::validate),
                "maxLength" => Some(keywords::max_length::validate),
                "maxProperties" => Some(keywords::max_properties::validate),
                "minimum" => Some(keywords::minimum::validate),
                "minItems" => Some(keywords::min_items::validate),
                "minLength" => Some(keywords::min_length::validate),
                "minProperties" => Some(keywords::min_properties::validate),
                "multipleOf" => Some(keywords::multiple_of::validate),
                "not" => Some(keywords::not::validate),
                "oneOf" => Some(keywords::one_of::validate),
                "pattern" => Some(keywords::pattern::validate),
                "patternProperties" => Some(keywords::pattern_properties::validate),
                "properties" => Some(keywords::properties::validate),
                "propertyNames" => Some(keywords::property_names::validate),
                "required" => Some(keywords::required::validate),
                "type" => Some(keywords::type_::validate),
                "uniqueItems" => Some(keywords::unique_items::validate),
                _ => None,
            },
            Draft::Draft201909 => match keyword {
                "$recursiveRef" => Some(keywords::unsupported::validate),
                "$ref" => Some(keywords::ref_::validate),
                "additionalItems" => Some(keywords::additional_items::validate),
                "additionalProperties" => Some(keywords::additional_properties::validate),
                "allOf" => Some(keywords::all_of::validate),
                "anyOf" => Some(keywords::any_of::validate),
                "const" => Some(keywords::const_::validate),
                "contains" => Some(keywords::contains::validate),
                "dependencies" => Some(keywords::dependencies::validate),
                "dependentRequired" => Some(keywords::dependent_required::validate),
                "dependentSchemas" => Some(keywords::dependent_schemas::validate),
                "enum" => Some(keywords::enum_::validate),
                "exclusiveMaximum" => Some(keywords::exclusive_maximum::validate),
                "exclusiveMinimum" => Some(keywords::exclusive_minimum::validate),
                "format" => Some(keywords::format::validate),
                "if" => Some(keywords::if_::validate),
                "items" => Some(keywords::items::validate),
                "maximum" => Some(keywords::maximum::validate),
                "maxItems" => Some(keywords::max_items::validate),
                "maxLength" => Some(keywords::max_length::validate),
                "maxProperties" => Some(keywords::max_properties::validate),
                "minimum" => Some(keywords::minimum::validate),
                "minItems" => Some(keywords::min_items::validate),
                "minLength" => Some(keywords::min_length::validate),
                "minProperties" => Some(keywords::min_properties::validate),
                "multipleOf" => Some(keywords::multiple_of::validate),
                "not" => Some(keywords::not::validate),
                "oneOf" => Some(keywords::one_of::validate),
                "pattern" => Some(keywords::pattern::validate),
                "patternProperties" => Some(keywords::pattern_properties::validate),
                "properties" => Some(keywords::properties::validate),
                "propertyNames" => Some(keywords::property_names::validate),
                "required" => Some(keywords::required::validate),
                "type" => Some(keywords::type_::validate),
                "unevaluatedItems" => Some(keywords::unsupported::validate),
                "unevaluatedProperties" => Some(keywords::unsupported::validate),
                "uniqueItems" => Some(keywords::unique_items::validate),
                _ => None,
            },
            Draft::Draft202012 => match keyword {
                "$dynamicRef" => Some(keywords::unsupported::validate),
                "$ref" => Some(keywords::ref_::validate),
                "additionalProperties" => Some(keywords::additional_properties::validate),
                "allOf" => Some(keywords::all_of::validate),
                "anyOf" => Some(keywords::any_of::validate),
                "const" => Some(keywords::const_::validate),
                "contains" => Some(keywords::contains::validate),
                "dependentRequired" => Some(keywords::dependent_required::validate),
                "dependentSchemas" => Some(keywords::dependent_schemas::validate),
                "enum" => Some(keywords::enum_::validate),
                "exclusiveMaximum" => Some(keywords::exclusive_maximum::validate),
                "exclusiveMinimum" => Some(keywords::exclusive_minimum::validate),
                "format" => Some(keywords::format::validate),
                "if" => Some(keywords::if_::validate),
                "items" => Some(keywords::items::validate),
                "maximum" => Some(keywords::maximum::validate),
                "maxItems" => Some(keywords::max_items::validate),
                "maxLength" => Some(keywords::max_length::validate),
                "maxProperties" => Some(keywords::max_properties::validate),
                "minimum" => Some(keywords::minimum::validate),
                "minItems" => Some(keywords::min_items::validate),
                "minLength" => Some(keywords::min_length::validate),
                "minProperties" => Some(keywords::min_properties::validate),
                "multipleOf" => Some(keywords::multiple_of::validate),
                "not" => Some(keywords::not::validate),
                "oneOf" => Some(keywords::one_of::validate),
                "pattern" => Some(keywords::pattern::validate),
                "patternProperties" => Some(keywords::pattern_properties::validate),
                "prefixItems" => Some(keywords::prefix_items::validate),
                "properties" => Some(keywords::properties::validate),
                "propertyNames" => Some(keywords::property_names::validate),
                "required" => Some(keywords::required::validate),
                "type" => Some(keywords::type_::validate),
                "unevaluatedItems" => Some(keywords::unsupported::validate),
                "unevaluatedProperties" => Some(keywords::unsupported::validate),
                "uniqueItems" => Some(keywords::unique_items::validate),
                _ => None,
            },
        }
    }
}

/// Get the `Draft` from a meta-schema URL.
pub(crate) fn draft_from_url(url: &str) -> Option<Draft> {
    match url {
        "http://json-schema.org/draft-07/schema#"
        | "https://json-schema.org/draft-07/schema#"
        | "http://json-schema.org/draft-07/schema"
        | "https://json-schema.org/draft-07/schema" => Some(Draft::Draft7),
        "http://json-schema.org/draft-06/schema#"
        | "https://json-schema.org/draft-06/schema#"
        | "http://json-schema.org/draft-06/schema"
        | "https://json-schema.org/draft-06/schema" => Some(Draft::Draft6),
        "http://json-schema.org/draft-04/schema#"
        | "https://json-schema.org/draft-04/schema#"
        | "http://json-schema.org/draft-04/schema"
        | "https://json-schema.org/draft-04/schema" => Some(Draft::Draft4),
        "https://json-schema.org/draft/2019-09/schema"
        | "http://json-schema.org/draft/2019-09/schema" => Some(Draft::Draft201909),
        "https://json-schema.org/draft/2020-12/schema"
        | "http://json-schema.org/draft/2020-12/schema" => Some(Draft::Draft202012),
        _ => None,
    }
}

/// Get the `Draft` from the `$schema` member of a schema document.
pub(crate) fn draft_from_schema(schema: &Value) -> Option<Draft> {
    schema
        .as_object()
        .and_then(|schema| schema.get("$schema"))
        .and_then(Value::as_str)
        .and_then(draft_from_url)
}

/// The identifier anchor of a schema object, if any.
pub(crate) fn id_of(draft: Draft, schema: &Value) -> Option<&str> {
    if let Value::Object(object) = schema {
        if draft == Draft::Draft4 {
            object.get("id")
        } else {
            object.get("$id")
        }
        .and_then(Value::as_str)
    } else {
        None
    }
}

/// The active dispatch table: a draft plus the lenient-overrides flag.
///
/// The lenient variant replaces exactly six entries of the draft 7 table and
/// leaves every other keyword untouched.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub(crate) struct Dialect {
    draft: Draft,
    lenient: bool,
}

impl Dialect {
    pub(crate) fn standard(draft: Draft) -> Dialect {
        Dialect {
            draft,
            lenient: false,
        }
    }

    pub(crate) fn lenient() -> Dialect {
        Dialect {
            draft: Draft::Draft7,
            lenient: true,
        }
    }

    pub(crate) fn draft(self) -> Draft {
        self.draft
    }

    pub(crate) fn get_keyword(self, keyword: &str) -> Option<KeywordFn> {
        if self.lenient {
            match keyword {
                "additionalProperties" => {
                    return Some(keywords::lenient::additional_properties)
                }
                "allOf" => return Some(keywords::lenient::all_of),
                "const" => return Some(keywords::lenient::const_),
                "enum" => return Some(keywords::lenient::enum_),
                "properties" => return Some(keywords::lenient::properties),
                "type" => return Some(keywords::lenient::type_),
                _ => {}
            }
        }
        self.draft.get_keyword(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"$schema": "http://json-schema.org/draft-07/schema#"}), Some(Draft::Draft7))]
    #[test_case(json!({"$schema": "http://json-schema.org/draft-06/schema#"}), Some(Draft::Draft6))]
    #[test_case(json!({"$schema": "http://json-schema.org/draft-04/schema#"}), Some(Draft::Draft4))]
    #[test_case(json!({"$schema": "https://json-schema.org/draft/2019-09/schema"}), Some(Draft::Draft201909))]
    #[test_case(json!({"$schema": "https://json-schema.org/draft/2020-12/schema"}), Some(Draft::Draft202012))]
    #[test_case(json!({"$schema": "http://example.com/custom/schema#"}), None)]
    #[test_case(json!({"type": "string"}), None)]
    fn test_draft_from_schema(schema: Value, draft: Option<Draft>) {
        assert_eq!(draft_from_schema(&schema), draft);
    }

    #[test]
    fn draft_4_uses_plain_id() {
        let schema = json!({"id": "http://example.com/a", "$id": "http://example.com/b"});
        assert_eq!(id_of(Draft::Draft4, &schema), Some("http://example.com/a"));
        assert_eq!(id_of(Draft::Draft7, &schema), Some("http://example.com/b"));
    }

    #[test]
    fn lenient_overrides_are_narrow() {
        let standard = Dialect::standard(Draft::Draft7);
        let lenient = Dialect::lenient();
        for keyword in ["minimum", "required", "items", "not", "oneOf", "$ref"] {
            assert_eq!(
                standard.get_keyword(keyword).is_some(),
                lenient.get_keyword(keyword).is_some(),
                "{} should not be overridden",
                keyword
            );
        }
        assert!(lenient.get_keyword("unknownKeyword").is_none());
    }
}
