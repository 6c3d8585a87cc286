//! Module Path Value Object
//!
//! A crate-relative Rust module path such as `restaurant::staff`, stored as
//! segments without the leading `crate`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ModulePath(Vec<String>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid module path '{path}': {reason}")]
pub struct ModulePathError {
    pub path: String,
    pub reason: &'static str,
}

fn is_identifier(segment: &str) -> bool {
    let raw = segment.strip_prefix("r#").unwrap_or(segment);
    let mut chars = raw.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl ModulePath {
    /// The crate root (no segments).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse `a::b::c`; a leading `crate::` is accepted and dropped.
    pub fn parse(raw: &str) -> Result<Self, ModulePathError> {
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix("crate::").unwrap_or(trimmed);
        if body.is_empty() || body == "crate" {
            return Err(ModulePathError {
                path: raw.to_string(),
                reason: "path is empty",
            });
        }

        let mut segments = Vec::new();
        for segment in body.split("::") {
            if !is_identifier(segment) {
                return Err(ModulePathError {
                    path: raw.to_string(),
                    reason: "segments must be Rust identifiers",
                });
            }
            if matches!(segment, "self" | "super" | "crate") {
                return Err(ModulePathError {
                    path: raw.to_string(),
                    reason: "relative segments are not allowed",
                });
            }
            segments.push(segment.to_string());
        }
        Ok(Self(segments))
    }

    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `path` lies at or below this module.
    pub fn contains(&self, path: &[String]) -> bool {
        path.len() >= self.0.len() && path[..self.0.len()] == self.0[..]
    }

    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("crate")
        } else {
            f.write_str(&self.0.join("::"))
        }
    }
}
