//! Check Use Case
//!
//! Orchestrates a boundary check: scan sources, detect violations, apply the
//! manifest's allow rules and report progress through the event port.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{AllowRule, BoundaryViolation, ModuleDecl};
use crate::domain::ports::{CheckEvent, CheckEventSink, ReferenceSource, SkippedFile};
use crate::domain::services::{BoundaryDetector, ModuleGraph, ModuleGraphError};
use crate::error::{BrigadeError, BrigadeResult};

/// Options for the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Manifest the modules came from (for reporting)
    pub manifest: PathBuf,
    /// Source root being scanned (for reporting)
    pub source_root: PathBuf,
    /// Also check code outside every declared module
    pub include_unowned: bool,
    /// Reviewed exceptions
    pub allow: Vec<AllowRule>,
}

/// A violation suppressed by an allow rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedViolation {
    pub violation: BoundaryViolation,
    pub reason: Option<String>,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub violations: Vec<BoundaryViolation>,
    pub allowed: Vec<AllowedViolation>,
    pub skipped: Vec<SkippedFile>,
    pub modules: usize,
    pub files: usize,
    pub references: usize,
}

impl CheckReport {
    /// No violations left after allow rules
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

pub struct CheckUseCase {
    source: Box<dyn ReferenceSource>,
    events: Arc<dyn CheckEventSink>,
}

impl CheckUseCase {
    pub fn new(source: Box<dyn ReferenceSource>, events: Arc<dyn CheckEventSink>) -> Self {
        Self { source, events }
    }

    pub fn execute(
        &self,
        modules: Vec<ModuleDecl>,
        options: &CheckOptions,
    ) -> BrigadeResult<CheckReport> {
        let module_count = modules.len();
        let graph = ModuleGraph::new(modules).map_err(|err| match err {
            ModuleGraphError::DuplicateModule { module } => BrigadeError::DuplicateModule {
                module,
                file: options.manifest.clone(),
            },
            other => BrigadeError::InvalidManifest {
                file: options.manifest.clone(),
                message: other.to_string(),
            },
        })?;

        self.events.on_check_event(CheckEvent::Started {
            manifest: options.manifest.clone(),
            source_root: options.source_root.clone(),
            module_count,
        });

        let outcome = self.source.scan()?;
        let detailed = self.events.wants_detailed_events();

        if detailed {
            for file in &outcome.files {
                self.events.on_check_event(CheckEvent::FileScanned {
                    path: file.path.clone(),
                    references: file.references.len(),
                });
            }
        }
        for skipped in &outcome.skipped {
            self.events.on_check_event(CheckEvent::FileSkipped {
                path: skipped.path.clone(),
                reason: skipped.reason.clone(),
            });
        }

        let references: Vec<_> = outcome.references().cloned().collect();
        let detector = BoundaryDetector::new(&graph).with_unowned(options.include_unowned);

        let mut report = CheckReport {
            modules: module_count,
            files: outcome.files.len(),
            references: references.len(),
            skipped: outcome.skipped.clone(),
            ..CheckReport::default()
        };

        for violation in detector.detect(&references) {
            match options.allow.iter().find(|rule| rule.permits(&violation)) {
                Some(rule) => {
                    self.events.on_check_event(CheckEvent::ViolationAllowed {
                        violation: violation.clone(),
                        reason: rule.reason.clone(),
                    });
                    report.allowed.push(AllowedViolation {
                        violation,
                        reason: rule.reason.clone(),
                    });
                }
                None => {
                    self.events.on_check_event(CheckEvent::ViolationFound {
                        violation: violation.clone(),
                    });
                    report.violations.push(violation);
                }
            }
        }

        self.events.on_check_event(CheckEvent::Completed {
            files: report.files,
            references: report.references,
            violations: report.violations.len(),
            allowed: report.allowed.len(),
        });

        Ok(report)
    }
}
