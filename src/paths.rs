//! Locations within schemas and validated instances.
use std::fmt::{self, Write};

/// A single segment of a JSON Pointer: an object property or an array index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum PathChunk {
    Property(String),
    Index(usize),
}

impl From<&str> for PathChunk {
    #[inline]
    fn from(value: &str) -> Self {
        PathChunk::Property(value.to_string())
    }
}

impl From<String> for PathChunk {
    #[inline]
    fn from(value: String) -> Self {
        PathChunk::Property(value)
    }
}

impl From<usize> for PathChunk {
    #[inline]
    fn from(value: usize) -> Self {
        PathChunk::Index(value)
    }
}

/// An immutable JSON Pointer (RFC 6901) into a schema or an instance.
///
/// The root pointer renders as the empty string; `~` and `/` inside property
/// names render as `~0` and `~1`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JsonPointer(Vec<PathChunk>);

impl JsonPointer {
    /// Whether the pointer addresses the whole document.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The pointer segments, each cast to `String`, without escaping.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
            .into_iter()
            .map(|chunk| match chunk {
                PathChunk::Property(value) => value,
                PathChunk::Index(index) => index.to_string(),
            })
            .collect()
    }
}

impl From<&[PathChunk]> for JsonPointer {
    #[inline]
    fn from(path: &[PathChunk]) -> Self {
        JsonPointer(path.to_vec())
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.0 {
            f.write_char('/')?;
            match chunk {
                PathChunk::Property(property) => {
                    for ch in property.chars() {
                        match ch {
                            '~' => f.write_str("~0")?,
                            '/' => f.write_str("~1")?,
                            _ => f.write_char(ch)?,
                        }
                    }
                }
                PathChunk::Index(index) => write!(f, "{}", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_empty() {
        assert_eq!(JsonPointer::default().to_string(), "");
        assert!(JsonPointer::default().is_root());
    }

    #[test]
    fn segments_are_escaped() {
        let pointer = JsonPointer(vec![
            PathChunk::Property("a/b".to_string()),
            PathChunk::Property("m~n".to_string()),
            PathChunk::Index(3),
        ]);
        assert_eq!(pointer.to_string(), "/a~1b/m~0n/3");
    }

    #[test]
    fn into_vec_keeps_raw_segments() {
        let pointer = JsonPointer(vec![
            PathChunk::Property("a/b".to_string()),
            PathChunk::Index(0),
        ]);
        assert_eq!(pointer.into_vec(), vec!["a/b".to_string(), "0".to_string()]);
    }
}
