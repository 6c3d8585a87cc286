//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{CheckOptions, CheckUseCase};
use crate::config::Manifest;
use crate::domain::ports::CheckEventSink;
use crate::infrastructure::RustSourceScanner;

/// Scanner configured from a manifest
pub fn create_scanner(manifest: &Manifest, manifest_path: &Path) -> RustSourceScanner {
    let base = manifest_path.parent().unwrap_or_else(|| Path::new(""));
    RustSourceScanner::new(manifest.source_root(manifest_path))
        .with_base(base)
        .with_crate_name(manifest.project.crate_name.clone())
        .with_exclude(manifest.check.exclude.clone())
}

/// Create a check use case with all dependencies wired up
pub fn create_check_use_case(
    manifest: &Manifest,
    manifest_path: &Path,
    events: Arc<dyn CheckEventSink>,
) -> CheckUseCase {
    let scanner = create_scanner(manifest, manifest_path);
    CheckUseCase::new(Box::new(scanner), events)
}

/// Check options taken from a manifest
pub fn check_options(manifest: &Manifest, manifest_path: &Path) -> CheckOptions {
    CheckOptions {
        manifest: manifest_path.to_path_buf(),
        source_root: manifest.source_root(manifest_path),
        include_unowned: manifest.check.include_unowned,
        allow: manifest.allow_rules(),
    }
}
