//! Command handlers

pub mod check;
pub mod explain;
pub mod modules;

use std::path::PathBuf;

use anyhow::{Context, Result};

use brigade::config::{ConfigWarning, Manifest};
use brigade::presentation::ColorWhen;

/// Flags shared by every subcommand
pub struct Globals {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub manifest: Option<PathBuf>,
}

/// A loaded manifest and where it came from
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: Manifest,
    pub warnings: Vec<ConfigWarning>,
}

pub fn load_manifest(globals: &Globals) -> Result<LoadedManifest> {
    let path = match &globals.manifest {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir()?;
            Manifest::discover(&cwd)?
        }
    };

    let (manifest, warnings) = Manifest::load_with_warnings(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    Ok(LoadedManifest {
        path,
        manifest: manifest.with_env_overrides(),
        warnings,
    })
}
