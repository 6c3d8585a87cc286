//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Public surfaces, module declarations, violations
//! - `value_objects/` - Names, module paths, operation contracts
//! - `services/` - The boundary detector
//! - `ports/` - Event sinks and the reference source
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - Scanning and reporting go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
