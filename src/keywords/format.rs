//! The `format` keyword with its built-in set of checks. Unknown format
//! names are annotations and assert nothing.
use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::{Map, Value};
use std::{net::IpAddr, str::FromStr};
use url::Url;

lazy_static::lazy_static! {
    static ref IRI_REFERENCE_RE: Regex =
        Regex::new(r"^(\w+:(/?/?))?[^#\\\s]*(#[^\\\s]*)?\z").expect("Is a valid regex");
    static ref JSON_POINTER_RE: Regex =
        Regex::new(r"^(/(([^/~])|(~[01]))*)*\z").expect("Is a valid regex");
    static ref RELATIVE_JSON_POINTER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)\z").expect("Is a valid regex");
    static ref TIME_RE: Regex = Regex::new(
        r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])(\.[0-9]{6})?(([Zz])|([+|\-]([01][0-9]|2[0-3]):[0-5][0-9]))\z",
    ).expect("Is a valid regex");
    static ref URI_REFERENCE_RE: Regex =
        Regex::new(r"^(\w+:(/?/?))?[^#\\\s]*(#[^\\\s]*)?\z").expect("Is a valid regex");
    static ref URI_TEMPLATE_RE: Regex = Regex::new(
        r#"^(?:(?:[^\x00-\x20"'<>%\\^`{|}]|%[0-9a-f]{2})|\{[+#./;?&=,!@|]?(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?(?:,(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?)*})*\z"#
    ).expect("Is a valid regex");
}

#[inline]
fn is_valid_email(item: &str) -> bool {
    item.contains('@')
}

#[inline]
fn is_valid_hostname(item: &str) -> bool {
    !(item.ends_with('-')
        || item.starts_with('-')
        || item.is_empty()
        || item.chars().count() > 255
        || item
            .chars()
            .any(|ch| !(ch.is_alphanumeric() || ch == '-' || ch == '.'))
        || item.split('.').any(|part| part.chars().count() > 63))
}

pub(crate) fn validate(
    context: &mut ValidationContext<'_>,
    schema: &Value,
    instance: &Value,
    _parent: &Map<String, Value>,
) -> Vec<ValidationError> {
    let format = match schema {
        Value::String(format) => format,
        _ => return vec![context.error(instance, ValidationErrorKind::Schema)],
    };
    let item = match instance {
        Value::String(item) => item,
        _ => return Vec::new(),
    };
    let valid = match format.as_str() {
        "date" => NaiveDate::parse_from_str(item, "%Y-%m-%d").is_ok(),
        "date-time" => DateTime::parse_from_rfc3339(item).is_ok(),
        "email" | "idn-email" => is_valid_email(item),
        "hostname" | "idn-hostname" => is_valid_hostname(item),
        "ipv4" => matches!(IpAddr::from_str(item), Ok(IpAddr::V4(_))),
        "ipv6" => matches!(IpAddr::from_str(item), Ok(IpAddr::V6(_))),
        "iri" | "uri" => Url::from_str(item).is_ok(),
        "iri-reference" => IRI_REFERENCE_RE.is_match(item),
        "json-pointer" => JSON_POINTER_RE.is_match(item),
        "regex" => Regex::new(item).is_ok(),
        "relative-json-pointer" => RELATIVE_JSON_POINTER_RE.is_match(item),
        "time" => TIME_RE.is_match(item),
        "uri-reference" => URI_REFERENCE_RE.is_match(item),
        "uri-template" => URI_TEMPLATE_RE.is_match(item),
        _ => true,
    };
    if valid {
        Vec::new()
    } else {
        vec![context.error(
            instance,
            ValidationErrorKind::Format {
                format: format.clone(),
            },
        )]
    }
}
