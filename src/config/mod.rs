//! Manifest (`brigade.toml`) handling
//!
//! Priority, highest first:
//! 1. CLI flags
//! 2. Environment variables (BRIGADE_*)
//! 3. The manifest
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    AllowConfig, CheckConfig, ColorMode, Manifest, ModuleConfig, OutputConfig, OutputFormat,
    ProjectConfig, MANIFEST_FILE,
};
