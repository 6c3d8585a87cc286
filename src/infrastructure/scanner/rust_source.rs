//! Rust source scanner
//!
//! Walks the source root with the `ignore` crate (so `.gitignore` applies),
//! drops files matching the manifest's `exclude` patterns and parses every
//! remaining `.rs` file with `syn`.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;
use syn::visit::Visit;
use thiserror::Error;

use crate::domain::entities::ObservedReference;
use crate::domain::ports::{ReferenceSource, ScanOutcome, ScannedFile, SkippedFile};
use crate::domain::value_objects::ModulePath;
use crate::error::{BrigadeError, BrigadeResult};

use super::module_path::module_path_for_file;
use super::visitor::ReferenceCollector;

/// Why a single file was skipped
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("file name is not a Rust module path")]
    NotAModule,
}

/// Collect references from one file's content.
///
/// `file` is only used for the reported locations.
pub fn scan_source(
    content: &str,
    file: &Path,
    module: &ModulePath,
    crate_name: Option<&str>,
) -> Result<Vec<ObservedReference>, ScanError> {
    let ast = syn::parse_file(content).map_err(|e| {
        let start = e.span().start();
        ScanError::Parse {
            line: start.line,
            column: start.column + 1,
            message: e.to_string(),
        }
    })?;

    let mut collector = ReferenceCollector::new(file, module, crate_name);
    collector.visit_file(&ast);
    Ok(collector.references)
}

pub struct RustSourceScanner {
    source_root: PathBuf,
    /// Directory `exclude` patterns and reported paths are relative to
    base: PathBuf,
    crate_name: Option<String>,
    exclude: Vec<String>,
}

impl RustSourceScanner {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        let source_root = source_root.into();
        Self {
            base: source_root.clone(),
            source_root,
            crate_name: None,
            exclude: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_crate_name(mut self, crate_name: Option<String>) -> Self {
        self.crate_name = crate_name;
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    fn exclude_matcher(&self) -> BrigadeResult<Gitignore> {
        let mut builder = GitignoreBuilder::new(&self.base);
        for pattern in &self.exclude {
            builder
                .add_line(None, pattern)
                .map_err(|e| BrigadeError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
        }
        builder.build().map_err(|e| BrigadeError::InvalidPattern {
            pattern: self.exclude.join(", "),
            message: e.to_string(),
        })
    }

    fn is_excluded(&self, matcher: &Gitignore, path: &Path) -> bool {
        match path.strip_prefix(&self.base) {
            Ok(rel) => matcher.matched_path_or_any_parents(rel, false).is_ignore(),
            Err(_) => false,
        }
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.base)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    fn scan_file(&self, path: &Path) -> Result<Vec<ObservedReference>, ScanError> {
        let module = module_path_for_file(&self.source_root, path).ok_or(ScanError::NotAModule)?;
        let content = fs::read_to_string(path)?;
        scan_source(
            &content,
            &self.display_path(path),
            &module,
            self.crate_name.as_deref(),
        )
    }
}

impl ReferenceSource for RustSourceScanner {
    fn scan(&self) -> Result<ScanOutcome, BrigadeError> {
        if !self.source_root.is_dir() {
            return Err(BrigadeError::SourceRootNotFound {
                path: self.source_root.clone(),
            });
        }

        let matcher = self.exclude_matcher()?;
        let walker = WalkBuilder::new(&self.source_root)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut outcome = ScanOutcome::default();
        for entry in walker {
            let entry = entry.map_err(|e| BrigadeError::Walk {
                path: self.source_root.clone(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_some_and(|t| t.is_file())
                || path.extension().and_then(|e| e.to_str()) != Some("rs")
                || self.is_excluded(&matcher, path)
            {
                continue;
            }

            match self.scan_file(path) {
                Ok(references) => outcome.files.push(ScannedFile {
                    path: self.display_path(path),
                    references,
                }),
                Err(err) => outcome.skipped.push(SkippedFile {
                    path: self.display_path(path),
                    reason: err.to_string(),
                }),
            }
        }

        Ok(outcome)
    }
}
