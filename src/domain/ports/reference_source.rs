//! Reference Source port
//!
//! Supplies the observed reference graph for the boundary check.

use std::path::PathBuf;

use crate::domain::entities::ObservedReference;
use crate::error::BrigadeError;

/// A file the source could not read or parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// References found in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub references: Vec<ObservedReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub files: Vec<ScannedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl ScanOutcome {
    pub fn reference_count(&self) -> usize {
        self.files.iter().map(|f| f.references.len()).sum()
    }

    pub fn references(&self) -> impl Iterator<Item = &ObservedReference> {
        self.files.iter().flat_map(|f| f.references.iter())
    }
}

pub trait ReferenceSource: Send + Sync {
    fn scan(&self) -> Result<ScanOutcome, BrigadeError>;
}
