//! Local reference index. Implements the lookup behind the `$ref` keyword.
//!
//! The index is built once per validator by walking the schema root: every
//! object carrying an `$id` (or `id` in draft 4) anchor is recorded under its
//! canonical URL, composed against the enclosing scope. Remote documents are
//! never fetched; following a reference that leaves the document is reported
//! as a validation error by the `$ref` keyword.
use crate::{
    error::SchemaError,
    schemas::{id_of, Draft},
};
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

pub(crate) const DOCUMENT_PROTOCOL: &str = "json-schema:///";

/// Failure modes of a local-only reference lookup.
#[derive(Debug, PartialEq)]
pub(crate) enum ResolveError {
    /// The reference points to another document.
    Remote(String),
    /// The reference addresses nothing within this document.
    Dangling(String),
}

/// Maps every identifier anchor reachable in the root schema to the JSON
/// Pointer of its subschema. Read-only once built.
#[derive(Debug)]
pub(crate) struct Resolver {
    schemas: HashMap<String, String>,
}

impl Resolver {
    pub(crate) fn new(draft: Draft, scope: &Url, schema: &Value) -> Result<Resolver, SchemaError> {
        let mut schemas = HashMap::new();
        let mut pointer = String::new();
        index_subschemas(draft, schema, scope, &mut pointer, &mut schemas)?;
        Ok(Resolver { schemas })
    }

    /// Resolve an absolute URL (already composed against the current scope)
    /// to a subschema of `root`, together with the fragment-less resource URL
    /// that becomes the new resolution scope.
    pub(crate) fn resolve<'v>(
        &self,
        root: &'v Value,
        url: &Url,
    ) -> Result<(&'v Value, Url), ResolveError> {
        let mut resource = url.clone();
        resource.set_fragment(None);
        // Location-independent identifiers win over pointer traversal.
        if let Some(pointer) = self.schemas.get(url.as_str()) {
            if let Some(resolved) = root.pointer(pointer) {
                return Ok((resolved, resource));
            }
        }
        let document = if resource.as_str() == DOCUMENT_PROTOCOL {
            root
        } else if let Some(pointer) = self.schemas.get(resource.as_str()) {
            root.pointer(pointer)
                .ok_or_else(|| ResolveError::Dangling(url.to_string()))?
        } else {
            return Err(ResolveError::Remote(url.to_string()));
        };
        let fragment = percent_decode_str(url.fragment().unwrap_or(""))
            .decode_utf8()
            .map_err(|_| ResolveError::Dangling(url.to_string()))?;
        if fragment.is_empty() {
            return Ok((document, resource));
        }
        match document.pointer(fragment.as_ref()) {
            Some(resolved) => Ok((resolved, resource)),
            None => Err(ResolveError::Dangling(url.to_string())),
        }
    }
}

/// Walk the document depth-first, recording each identifier anchor with the
/// pointer of the object that declared it. Values of `enum` and `const` are
/// data, not schemas, and are not descended.
fn index_subschemas(
    draft: Draft,
    schema: &Value,
    base_url: &Url,
    pointer: &mut String,
    schemas: &mut HashMap<String, String>,
) -> Result<(), SchemaError> {
    match schema {
        Value::Object(object) => {
            let mut scope = None;
            if let Some(id) = id_of(draft, schema) {
                let mut new_url = base_url.join(id)?;
                // Empty fragments are not distinguishable from absent ones
                if let Some("") = new_url.fragment() {
                    new_url.set_fragment(None);
                }
                schemas.insert(new_url.to_string(), pointer.clone());
                scope = Some(new_url);
            }
            let base_url = scope.as_ref().unwrap_or(base_url);
            for (key, subschema) in object {
                if key == "enum" || key == "const" {
                    continue;
                }
                let length = pointer.len();
                pointer.push('/');
                pointer.push_str(&key.replace('~', "~0").replace('/', "~1"));
                index_subschemas(draft, subschema, base_url, pointer, schemas)?;
                pointer.truncate(length);
            }
        }
        Value::Array(items) => {
            for (index, subschema) in items.iter().enumerate() {
                let length = pointer.len();
                pointer.push('/');
                pointer.push_str(&index.to_string());
                index_subschemas(draft, subschema, base_url, pointer, schemas)?;
                pointer.truncate(length);
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document_scope() -> Url {
        Url::parse(DOCUMENT_PROTOCOL).expect("Always valid")
    }

    #[test]
    fn indexes_nested_anchors() {
        let schema = json!({
            "$id": "http://example.com/root.json",
            "definitions": {
                "a": {"$id": "folder/a.json", "type": "integer"},
            }
        });
        let scope = Url::parse("http://example.com/root.json").expect("Always valid");
        let resolver = Resolver::new(Draft::Draft7, &scope, &schema).unwrap();
        let url = Url::parse("http://example.com/folder/a.json").expect("Always valid");
        let (resolved, _) = resolver.resolve(&schema, &url).unwrap();
        assert_eq!(resolved, schema.pointer("/definitions/a").unwrap());
    }

    #[test]
    fn resolves_pointer_fragments() {
        let schema = json!({"definitions": {"a~b": {"c/d": {"type": "null"}}}});
        let scope = document_scope();
        let resolver = Resolver::new(Draft::Draft7, &scope, &schema).unwrap();
        let url = Url::options()
            .base_url(Some(&scope))
            .parse("#/definitions/a~0b/c~1d")
            .unwrap();
        let (resolved, _) = resolver.resolve(&schema, &url).unwrap();
        assert_eq!(resolved, &json!({"type": "null"}));
    }

    #[test]
    fn enum_values_are_not_schemas() {
        let schema = json!({"enum": [{"$id": "http://example.com/x"}]});
        let scope = document_scope();
        let resolver = Resolver::new(Draft::Draft7, &scope, &schema).unwrap();
        let url = Url::parse("http://example.com/x").expect("Always valid");
        assert_eq!(
            resolver.resolve(&schema, &url),
            Err(ResolveError::Remote("http://example.com/x".to_string()))
        );
    }

    #[test]
    fn remote_references_are_not_fetched() {
        let schema = json!({"type": "object"});
        let scope = document_scope();
        let resolver = Resolver::new(Draft::Draft7, &scope, &schema).unwrap();
        let url = Url::parse("http://example.com/other.json").expect("Always valid");
        assert!(matches!(
            resolver.resolve(&schema, &url),
            Err(ResolveError::Remote(_))
        ));
    }

    #[test]
    fn dangling_pointer_is_reported() {
        let schema = json!({"definitions": {}});
        let scope = document_scope();
        let resolver = Resolver::new(Draft::Draft7, &scope, &schema).unwrap();
        let url = Url::options()
            .base_url(Some(&scope))
            .parse("#/definitions/missing")
            .unwrap();
        assert!(matches!(
            resolver.resolve(&schema, &url),
            Err(ResolveError::Dangling(_))
        ));
    }
}
