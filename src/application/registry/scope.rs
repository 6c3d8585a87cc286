//! Override Scope
//!
//! Scoped substitution of one surface operation. Beginning a scope pushes a
//! substitute onto the operation's binding stack; ending it (explicitly or on
//! drop, including during a panic unwind) removes exactly that substitute.
//!
//! Scopes on the same operation nest last-in-first-out. If an outer scope is
//! ended before an inner one, only the outer binding is removed and the inner
//! substitute stays current until its own scope ends.
//!
//! Overrides mutate bindings shared by every caller of the registry. Tests
//! that override the same operation of the same registry must not run
//! concurrently; give each such test its own registry instead.

use std::sync::Arc;

use crate::domain::entities::OperationSlot;
use crate::domain::ports::{RegistryEvent, RegistryEventSink};
use crate::domain::value_objects::ModuleName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeState {
    Active,
    Restored,
}

#[must_use = "dropping an OverrideScope immediately restores the previous binding"]
pub struct OverrideScope {
    module: ModuleName,
    slot: Arc<OperationSlot>,
    binding: u64,
    state: ScopeState,
    events: Arc<dyn RegistryEventSink>,
}

impl OverrideScope {
    pub(crate) fn new(
        module: ModuleName,
        slot: Arc<OperationSlot>,
        binding: u64,
        events: Arc<dyn RegistryEventSink>,
    ) -> Self {
        Self {
            module,
            slot,
            binding,
            state: ScopeState::Active,
            events,
        }
    }

    pub fn module(&self) -> &str {
        self.module.as_str()
    }

    pub fn operation(&self) -> &str {
        self.slot.name().as_str()
    }

    pub fn state(&self) -> ScopeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ScopeState::Active
    }

    /// Restore the binding this scope replaced.
    ///
    /// Returns `true` only for the call that performed the restoration;
    /// later calls are no-ops.
    pub fn end(&mut self) -> bool {
        if self.state == ScopeState::Restored {
            return false;
        }
        self.state = ScopeState::Restored;

        match self.slot.remove(self.binding) {
            Some(depth) => {
                self.events.on_registry_event(RegistryEvent::OverrideEnded {
                    module: self.module.to_string(),
                    operation: self.operation().to_string(),
                    depth,
                });
                true
            }
            None => false,
        }
    }
}

impl Drop for OverrideScope {
    fn drop(&mut self) {
        self.end();
    }
}

impl std::fmt::Debug for OverrideScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideScope")
            .field("module", &self.module)
            .field("operation", &self.operation())
            .field("state", &self.state)
            .finish()
    }
}
