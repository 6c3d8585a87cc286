//! Brigade - module isolation for monoliths
//!
//! A single-process application is split into named domain modules. Each module
//! exposes one public surface; everything else is private to it.
//!
//! Brigade provides two halves:
//!
//! - a runtime [`ModuleRegistry`] where each module registers its
//!   [`PublicSurface`]. Callers invoke operations by name or through a typed
//!   [`OperationRef`], and tests swap implementations with an
//!   [`OverrideScope`] that restores the original when dropped.
//! - a static boundary check (`brigade check`) that reads `brigade.toml`,
//!   parses the sources and reports every reference from one module into
//!   another module's internals.
//!
//! ```
//! use brigade::{ModuleRegistry, OperationRef, PublicSurface};
//!
//! const GET_KITCHEN_ROTA: OperationRef<(), Vec<String>> =
//!     OperationRef::new("staff", "GetKitchenRota");
//!
//! let registry = ModuleRegistry::new();
//! registry
//!     .register(
//!         PublicSurface::builder("staff")
//!             .operation("GetKitchenRota", |_: ()| vec!["A".to_string(), "B".to_string()])
//!             .build()?,
//!     )?;
//!
//! assert_eq!(GET_KITCHEN_ROTA.call(&registry, ())?, vec!["A", "B"]);
//!
//! {
//!     let _scope = GET_KITCHEN_ROTA.begin_override(&registry, |_: ()| vec!["X".to_string()])?;
//!     assert_eq!(GET_KITCHEN_ROTA.call(&registry, ())?, vec!["X"]);
//! }
//! assert_eq!(GET_KITCHEN_ROTA.call(&registry, ())?, vec!["A", "B"]);
//! # Ok::<(), brigade::RegistryError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckOptions, CheckReport, CheckUseCase, ModuleRegistry, OperationRef, OverrideScope,
    ScopeState,
};
pub use config::Manifest;
pub use domain::entities::{
    BoundaryViolation, Handler, ModuleDecl, PublicSurface, SurfaceBuilder, SurfaceDescription,
};
pub use domain::ports::{NoopEventSink, RegistryEvent, RegistryEventSink};
pub use domain::value_objects::{Contract, ModuleName, OperationName};
pub use error::{BrigadeError, BrigadeResult, RegistryError, RegistryResult};
