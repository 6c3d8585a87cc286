//! Domain Services
//!
//! Pure logic with no I/O dependencies.

mod boundary_detector;

pub use boundary_detector::{BoundaryDetector, ModuleGraph, ModuleGraphError, UNOWNED};
