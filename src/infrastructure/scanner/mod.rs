//! Source scanning for the boundary check

mod module_path;
mod rust_source;
mod visitor;

pub use module_path::module_path_for_file;
pub use rust_source::{scan_source, RustSourceScanner, ScanError};
