//! Application Layer
//!
//! - `ModuleRegistry` - Runtime registry of public surfaces with override scopes
//! - `CheckUseCase` - Orchestrates the static boundary check

pub mod check;
pub mod registry;

pub use check::{AllowedViolation, CheckOptions, CheckReport, CheckUseCase};
pub use registry::{ModuleRegistry, OperationRef, OverrideScope, ScopeState};
