//! Console Event Sink
//!
//! Human-readable progress lines on stderr, gated by verbosity:
//! - 0: warnings and skipped files
//! - 1: plus start/summary lines, allowed violations and registry events
//! - 2: plus one line per scanned file

use crate::domain::ports::{CheckEvent, CheckEventSink, RegistryEvent, RegistryEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    verbosity: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: u8) -> Self {
        Self::with_writer(io::stderr(), verbosity)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbosity: u8) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, level: u8, text: String) {
        if self.verbosity < level {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl CheckEventSink for ConsoleEventSink {
    fn on_check_event(&self, event: CheckEvent) {
        match event {
            CheckEvent::Started {
                manifest,
                source_root,
                module_count,
            } => self.line(
                1,
                format!(
                    "checking {} modules from {} in {}",
                    module_count,
                    manifest.display(),
                    source_root.display()
                ),
            ),
            CheckEvent::ManifestWarning { message } => self.line(0, format!("warning: {}", message)),
            CheckEvent::FileScanned { path, references } => {
                self.line(2, format!("scanned {} ({} references)", path.display(), references))
            }
            CheckEvent::FileSkipped { path, reason } => {
                self.line(0, format!("warning: skipped {}: {}", path.display(), reason))
            }
            CheckEvent::ViolationFound { .. } => {}
            CheckEvent::ViolationAllowed { violation, reason } => self.line(
                1,
                format!(
                    "allowed {}{}",
                    violation,
                    reason.map(|r| format!(" ({})", r)).unwrap_or_default()
                ),
            ),
            CheckEvent::Completed {
                files, references, ..
            } => self.line(1, format!("scanned {} files, {} references", files, references)),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= 2
    }
}

impl RegistryEventSink for ConsoleEventSink {
    fn on_registry_event(&self, event: RegistryEvent) {
        let text = match event {
            RegistryEvent::ModuleRegistered { module, operations } => {
                format!("registered {} ({} operations)", module, operations)
            }
            RegistryEvent::RegistrationRejected { module, reason } => {
                format!("rejected {}: {}", module, reason)
            }
            RegistryEvent::Sealed { modules } => format!("registry sealed with {} modules", modules),
            RegistryEvent::OverrideBegan {
                module,
                operation,
                depth,
            } => format!("override {}.{} (depth {})", module, operation, depth),
            RegistryEvent::OverrideEnded {
                module,
                operation,
                depth,
            } => format!("restored {}.{} (depth {})", module, operation, depth),
            RegistryEvent::LookupFailed {
                module,
                operation,
                reason,
            } => format!("lookup {}.{} failed: {}", module, operation, reason),
        };
        self.line(1, text);
    }
}
