//! Module registry, override scopes and typed operation handles.

mod module_registry;
mod operation;
mod scope;

pub use module_registry::ModuleRegistry;
pub use operation::OperationRef;
pub use scope::{OverrideScope, ScopeState};
