//! Boundary violation entities
//!
//! An `ObservedReference` is one path the scanner saw in source; a
//! `BoundaryViolation` is a reference the detector rejected.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::ModulePath;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file.display().to_string().replace('\\', "/"),
            self.line,
            self.column
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// Appears in a `use` declaration
    Use,
    /// Appears in an expression, type, pattern or attribute
    Path,
}

/// A path observed in source, already normalized to an absolute crate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedReference {
    /// Module whose code contains the reference
    pub origin: ModulePath,
    /// Absolute target path without the leading `crate`
    pub target: Vec<String>,
    /// `use a::b::*`
    pub glob: bool,
    pub kind: ReferenceKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoundaryViolation {
    /// Module whose internals contain the offending reference
    pub source_module: String,
    /// Module whose private symbol was reached
    pub target_module: String,
    /// Private symbol, relative to the target module
    pub symbol: String,
    pub kind: ReferenceKind,
    pub location: SourceLocation,
}

impl fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {}::{}",
            self.location, self.source_module, self.target_module, self.symbol
        )
    }
}
