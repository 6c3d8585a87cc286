//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod contract;
mod module_path;
mod name;

pub use contract::Contract;
pub use module_path::{ModulePath, ModulePathError};
pub use name::{ModuleName, OperationName};
