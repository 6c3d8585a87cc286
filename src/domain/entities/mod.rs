//! Domain Entities
//!
//! - `PublicSurface` - A module's overridable operation table
//! - `ModuleDecl` - Static declaration of a module for the boundary check
//! - `BoundaryViolation` - A reference that bypasses a public surface

mod module_decl;
mod surface;
mod violation;

pub use module_decl::{AllowRule, ModuleDecl, DEFAULT_SURFACE};
pub use surface::{
    Handler, OperationDescription, OperationSlot, PublicSurface, SurfaceBuilder,
    SurfaceDescription,
};
pub use violation::{BoundaryViolation, ObservedReference, ReferenceKind, SourceLocation};
