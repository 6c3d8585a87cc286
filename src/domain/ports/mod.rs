//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod check_events;
pub mod reference_source;
pub mod registry_events;

pub use check_events::{CheckEvent, CheckEventSink};
pub use reference_source::{ReferenceSource, ScanOutcome, ScannedFile, SkippedFile};
pub use registry_events::{NoopEventSink, RegistryEvent, RegistryEventSink};
