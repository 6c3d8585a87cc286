//! Registry Event Port
//!
//! Observable interface for the module registry: registrations, sealing,
//! override scopes and failed lookups.

/// Event emitted by a `ModuleRegistry`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A module's public surface was registered
    ModuleRegistered { module: String, operations: usize },

    /// A registration was refused
    RegistrationRejected { module: String, reason: String },

    /// Initialization finished
    Sealed { modules: usize },

    /// An override scope installed a substitute
    OverrideBegan {
        module: String,
        operation: String,
        depth: usize,
    },

    /// An override scope restored the previous binding
    OverrideEnded {
        module: String,
        operation: String,
        depth: usize,
    },

    /// A call or override named something that does not exist
    LookupFailed {
        module: String,
        operation: String,
        reason: String,
    },
}

/// Trait for receiving registry events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - ConsoleEventSink: human-readable lines on stderr
/// - NoopEventSink: silent operation
pub trait RegistryEventSink: Send + Sync {
    fn on_registry_event(&self, event: RegistryEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RegistryEventSink for NoopEventSink {
    fn on_registry_event(&self, _event: RegistryEvent) {}
}
