//! Manifest type definitions
//!
//! ```toml
//! [project]
//! root = "src"
//! crate_name = "bistro"
//!
//! [check]
//! exclude = ["src/legacy/**"]
//!
//! [[check.allow]]
//! from = "kitchen"
//! to = "staff"
//! symbol = "payroll"
//! reason = "moving to staff::api in Q3"
//!
//! [[modules]]
//! name = "staff"
//! surface = ["api"]
//! exports = ["Shift"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AllowRule, ModuleDecl, DEFAULT_SURFACE};
use crate::domain::value_objects::{ModuleName, ModulePath};
use crate::error::{BrigadeError, BrigadeResult};

use super::loader::{self, ConfigWarning};

/// File name searched for by `Manifest::discover`
pub const MANIFEST_FILE: &str = "brigade.toml";

/// Project layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Source root, relative to the manifest
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Crate name, so `crate_name::module::..` paths resolve like `crate::..`
    #[serde(default)]
    pub crate_name: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            crate_name: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

/// Boundary check settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckConfig {
    /// Gitignore-style patterns, relative to the manifest
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Check files that belong to no module
    #[serde(default)]
    pub include_unowned: bool,

    #[serde(default)]
    pub allow: Vec<AllowConfig>,
}

/// A reviewed exception
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowConfig {
    #[serde(default = "wildcard")]
    pub from: String,
    #[serde(default = "wildcard")]
    pub to: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

fn wildcard() -> String {
    "*".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,
}

/// One declared module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,

    /// Module path below the crate root; defaults to `name`
    #[serde(default)]
    pub path: Option<String>,

    /// Surface submodules; defaults to `["api"]`
    #[serde(default)]
    pub surface: Option<Vec<String>>,

    /// Public items at the module root
    #[serde(default)]
    pub exports: Vec<String>,
}

/// Contents of `brigade.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

impl Manifest {
    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> BrigadeResult<Self> {
        let (manifest, _warnings) = loader::load_with_warnings(path)?;
        Ok(manifest)
    }

    /// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BrigadeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Find `brigade.toml` in `start` or the nearest parent directory.
    pub fn discover(start: &Path) -> BrigadeResult<PathBuf> {
        loader::discover(start)
    }

    /// Apply environment variable overrides (BRIGADE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Source root resolved against the manifest's directory.
    pub fn source_root(&self, manifest_path: &Path) -> PathBuf {
        let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        base.join(&self.project.root)
    }

    /// Validated module declarations.
    pub fn module_decls(&self, manifest_path: &Path) -> BrigadeResult<Vec<ModuleDecl>> {
        let invalid = |message: String| BrigadeError::InvalidManifest {
            file: manifest_path.to_path_buf(),
            message,
        };

        let mut decls: Vec<ModuleDecl> = Vec::with_capacity(self.modules.len());
        for module in &self.modules {
            let name = ModuleName::new(module.name.as_str()).map_err(|e| invalid(e.to_string()))?;
            if decls.iter().any(|d| d.name == name) {
                return Err(BrigadeError::DuplicateModule {
                    module: module.name.clone(),
                    file: manifest_path.to_path_buf(),
                });
            }

            let raw_path = module.path.as_deref().unwrap_or(module.name.as_str());
            let path = ModulePath::parse(raw_path).map_err(|e| {
                invalid(format!("module '{}': {}", module.name, e))
            })?;

            let surface = module
                .surface
                .clone()
                .unwrap_or_else(|| vec![DEFAULT_SURFACE.to_string()]);
            for entry in surface.iter().chain(module.exports.iter()) {
                if ModulePath::parse(entry).map(|p| p.len()) != Ok(1) {
                    return Err(invalid(format!(
                        "module '{}': '{}' is not a single identifier",
                        module.name, entry
                    )));
                }
            }

            decls.push(
                ModuleDecl::new(name, path)
                    .with_surface(surface)
                    .with_exports(module.exports.clone()),
            );
        }
        Ok(decls)
    }

    pub fn allow_rules(&self) -> Vec<AllowRule> {
        self.check
            .allow
            .iter()
            .map(|a| AllowRule {
                from: a.from.clone(),
                to: a.to.clone(),
                symbol: a.symbol.clone(),
                reason: a.reason.clone(),
            })
            .collect()
    }
}
