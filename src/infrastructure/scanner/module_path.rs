//! File-to-module path mapping
//!
//! `src/lib.rs` and `src/main.rs` are the crate root, `src/a/mod.rs` and
//! `src/a.rs` are module `a`, `src/a/b.rs` is `a::b`.

use std::path::Path;

use crate::domain::value_objects::ModulePath;

/// Module path of `file` relative to the source root, or `None` when a path
/// component is not a Rust identifier (e.g. `src/bin/my-tool.rs`).
pub fn module_path_for_file(source_root: &Path, file: &Path) -> Option<ModulePath> {
    let rel = file.strip_prefix(source_root).unwrap_or(file);
    let mut parts: Vec<String> = rel
        .components()
        .filter_map(|c| c.as_os_str().to_str().map(|s| s.to_string()))
        .collect();

    let last = parts.pop()?;
    let stem = last.strip_suffix(".rs")?;
    let is_root_file = parts.is_empty() && (stem == "lib" || stem == "main");
    if !is_root_file && stem != "mod" {
        parts.push(stem.to_string());
    }

    if parts.is_empty() {
        return Some(ModulePath::root());
    }
    ModulePath::parse(&parts.join("::")).ok()
}
