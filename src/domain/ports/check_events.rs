//! Check Event Port
//!
//! Progress and findings of a boundary check run.

use std::path::PathBuf;

use crate::domain::entities::BoundaryViolation;

/// Event emitted during a boundary check
#[derive(Debug, Clone)]
pub enum CheckEvent {
    /// Check started
    Started {
        manifest: PathBuf,
        source_root: PathBuf,
        module_count: usize,
    },

    /// Non-fatal manifest problem (e.g. unknown key)
    ManifestWarning { message: String },

    /// A source file was parsed
    FileScanned { path: PathBuf, references: usize },

    /// A source file could not be parsed and was skipped
    FileSkipped { path: PathBuf, reason: String },

    /// A violation was found
    ViolationFound { violation: BoundaryViolation },

    /// A violation matched an allow rule
    ViolationAllowed {
        violation: BoundaryViolation,
        reason: Option<String>,
    },

    /// Check completed
    Completed {
        files: usize,
        references: usize,
        violations: usize,
        allowed: usize,
    },
}

/// Trait for receiving check events
pub trait CheckEventSink: Send + Sync {
    fn on_check_event(&self, event: CheckEvent);

    /// Whether this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl CheckEventSink for super::NoopEventSink {
    fn on_check_event(&self, _event: CheckEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
