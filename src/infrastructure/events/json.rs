//! JSON Event Sink
//!
//! Outputs check and registry events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CheckEvent, CheckEventSink, RegistryEvent, RegistryEventSink};
use chrono::{SecondsFormat, Utc};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert(
                "ts".to_string(),
                Utc::now()
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
                    .into(),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl CheckEventSink for JsonEventSink {
    fn on_check_event(&self, event: CheckEvent) {
        let json = match event {
            CheckEvent::Started {
                manifest,
                source_root,
                module_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "check",
                    "manifest": manifest.display().to_string(),
                    "source_root": source_root.display().to_string(),
                    "modules": module_count,
                })
            }

            CheckEvent::ManifestWarning { message } => {
                serde_json::json!({
                    "event": "warning",
                    "command": "check",
                    "message": message,
                })
            }

            CheckEvent::FileScanned { path, references } => {
                serde_json::json!({
                    "event": "file_scanned",
                    "command": "check",
                    "path": path.display().to_string(),
                    "references": references,
                })
            }

            CheckEvent::FileSkipped { path, reason } => {
                serde_json::json!({
                    "event": "file_skipped",
                    "command": "check",
                    "path": path.display().to_string(),
                    "reason": reason,
                })
            }

            CheckEvent::ViolationFound { violation } => {
                serde_json::json!({
                    "event": "violation",
                    "command": "check",
                    "violation": violation,
                })
            }

            CheckEvent::ViolationAllowed { violation, reason } => {
                serde_json::json!({
                    "event": "violation_allowed",
                    "command": "check",
                    "violation": violation,
                    "reason": reason,
                })
            }

            CheckEvent::Completed {
                files,
                references,
                violations,
                allowed,
            } => {
                let status = if violations == 0 { "clean" } else { "violations" };
                serde_json::json!({
                    "event": "complete",
                    "command": "check",
                    "status": status,
                    "files": files,
                    "references": references,
                    "violations": violations,
                    "allowed": allowed,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

impl RegistryEventSink for JsonEventSink {
    fn on_registry_event(&self, event: RegistryEvent) {
        let json = match event {
            RegistryEvent::ModuleRegistered { module, operations } => serde_json::json!({
                "event": "module_registered",
                "module": module,
                "operations": operations,
            }),
            RegistryEvent::RegistrationRejected { module, reason } => serde_json::json!({
                "event": "registration_rejected",
                "module": module,
                "reason": reason,
            }),
            RegistryEvent::Sealed { modules } => serde_json::json!({
                "event": "sealed",
                "modules": modules,
            }),
            RegistryEvent::OverrideBegan {
                module,
                operation,
                depth,
            } => serde_json::json!({
                "event": "override_began",
                "module": module,
                "operation": operation,
                "depth": depth,
            }),
            RegistryEvent::OverrideEnded {
                module,
                operation,
                depth,
            } => serde_json::json!({
                "event": "override_ended",
                "module": module,
                "operation": operation,
                "depth": depth,
            }),
            RegistryEvent::LookupFailed {
                module,
                operation,
                reason,
            } => serde_json::json!({
                "event": "lookup_failed",
                "module": module,
                "operation": operation,
                "reason": reason,
            }),
        };

        self.write_event(json);
    }
}
