//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `scanner/` - Walks and parses Rust sources (ReferenceSource)
//! - `events/` - Event sinks (JSON, console)

pub mod events;
pub mod scanner;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use scanner::{module_path_for_file, scan_source, RustSourceScanner, ScanError};
