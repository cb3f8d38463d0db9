//! Per-validation state shared by every keyword function.
use crate::{
    error::{ValidationError, ValidationErrorKind},
    paths::{JsonPointer, PathChunk},
    resolver::Resolver,
    schemas::Dialect,
};
use serde_json::Value;
use std::collections::HashSet;
use url::{ParseError, Url};

/// Transient state for one `validate` call: the two location stacks, the
/// active `$id` resolution scope and the `$ref` descents currently on the
/// stack. A fresh context is created per call, so a validator can be shared
/// between threads.
///
/// Both location stacks are mutated strictly in push/pop pairs tied to the
/// lexical scope of a descent; snapshots are taken only when an error is
/// recorded.
pub(crate) struct ValidationContext<'a> {
    pub(crate) root: &'a Value,
    pub(crate) resolver: &'a Resolver,
    pub(crate) dialect: Dialect,
    instance_path: Vec<PathChunk>,
    keyword_path: Vec<PathChunk>,
    scopes: Vec<Url>,
    active_refs: HashSet<(usize, usize)>,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(
        root: &'a Value,
        resolver: &'a Resolver,
        dialect: Dialect,
        scope: Url,
    ) -> ValidationContext<'a> {
        ValidationContext {
            root,
            resolver,
            dialect,
            instance_path: Vec::new(),
            keyword_path: Vec::new(),
            scopes: vec![scope],
            active_refs: HashSet::new(),
        }
    }

    #[inline]
    pub(crate) fn push_instance(&mut self, chunk: impl Into<PathChunk>) {
        self.instance_path.push(chunk.into());
    }

    #[inline]
    pub(crate) fn pop_instance(&mut self) {
        self.instance_path.pop();
    }

    #[inline]
    pub(crate) fn push_keyword(&mut self, chunk: impl Into<PathChunk>) {
        self.keyword_path.push(chunk.into());
    }

    #[inline]
    pub(crate) fn pop_keyword(&mut self) {
        self.keyword_path.pop();
    }

    /// The keyword currently being dispatched, when the top of the keyword
    /// path is a property name.
    pub(crate) fn current_keyword(&self) -> Option<&str> {
        match self.keyword_path.last() {
            Some(PathChunk::Property(name)) => Some(name),
            _ => None,
        }
    }

    pub(crate) fn instance_location(&self) -> JsonPointer {
        JsonPointer::from(self.instance_path.as_slice())
    }

    pub(crate) fn keyword_location(&self) -> JsonPointer {
        JsonPointer::from(self.keyword_path.as_slice())
    }

    /// Snapshot both locations into a new error record.
    pub(crate) fn error(&self, instance: &Value, kind: ValidationErrorKind) -> ValidationError {
        ValidationError {
            instance: instance.clone(),
            kind,
            instance_path: self.instance_location(),
            schema_path: self.keyword_location(),
        }
    }

    /// Current base URI for `$ref` and `$id` resolution.
    pub(crate) fn scope(&self) -> &Url {
        self.scopes.last().expect("Always non-empty")
    }

    pub(crate) fn push_scope(&mut self, scope: Url) {
        self.scopes.push(scope);
    }

    pub(crate) fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Build an absolute URL for a reference against the current scope.
    pub(crate) fn build_url(&self, reference: &str) -> Result<Url, ParseError> {
        Url::options().base_url(Some(self.scope())).parse(reference)
    }

    /// Mark a (reference target, instance) pair as being validated. Returns
    /// `false` when the pair is already on the stack, i.e. the reference is
    /// cyclic for this instance node.
    pub(crate) fn mark_seen(&mut self, schema: &Value, instance: &Value) -> bool {
        self.active_refs.insert(Self::pair(schema, instance))
    }

    pub(crate) fn unmark_seen(&mut self, schema: &Value, instance: &Value) {
        self.active_refs.remove(&Self::pair(schema, instance));
    }

    fn pair(schema: &Value, instance: &Value) -> (usize, usize) {
        (
            schema as *const Value as usize,
            instance as *const Value as usize,
        )
    }

    /// Both location stacks must be back at the root once a walk finishes.
    pub(crate) fn is_balanced(&self) -> bool {
        self.instance_path.is_empty() && self.keyword_path.is_empty()
    }
}
