//! Module declaration entity
//!
//! The static view of a module used by the boundary detector: where it lives
//! in the crate and which of its names form the public surface.

use crate::domain::value_objects::{ModuleName, ModulePath};

use super::BoundaryViolation;

/// Surface submodule assumed when a declaration names none.
pub const DEFAULT_SURFACE: &str = "api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    pub name: ModuleName,
    pub path: ModulePath,
    /// Child modules that make up the public surface (e.g. `api`)
    pub surface: Vec<String>,
    /// Items at the module root that count as public (re-exports)
    pub exports: Vec<String>,
}

impl ModuleDecl {
    pub fn new(name: ModuleName, path: ModulePath) -> Self {
        Self {
            name,
            path,
            surface: vec![DEFAULT_SURFACE.to_string()],
            exports: Vec::new(),
        }
    }

    pub fn with_surface(mut self, surface: Vec<String>) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_exports(mut self, exports: Vec<String>) -> Self {
        self.exports = exports;
        self
    }

    /// Whether the first segment below the module root is public.
    pub fn is_public_entry(&self, segment: &str) -> bool {
        self.surface.iter().any(|s| s == segment) || self.exports.iter().any(|e| e == segment)
    }
}

/// An explicit, reviewed exception to the boundary rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowRule {
    /// Source module, or `*`
    pub from: String,
    /// Target module, or `*`
    pub to: String,
    /// Symbol prefix relative to the target module; `None` allows everything
    pub symbol: Option<String>,
    pub reason: Option<String>,
}

impl AllowRule {
    pub fn permits(&self, violation: &BoundaryViolation) -> bool {
        let matches = |pattern: &str, value: &str| pattern == "*" || pattern == value;
        if !matches(&self.from, &violation.source_module) || !matches(&self.to, &violation.target_module)
        {
            return false;
        }
        match &self.symbol {
            None => true,
            Some(prefix) => {
                violation.symbol == *prefix
                    || violation
                        .symbol
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            }
        }
    }
}
