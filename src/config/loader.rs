//! Manifest loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BrigadeError, BrigadeResult};

use super::types::{ColorMode, Manifest, OutputFormat, MANIFEST_FILE};

/// Non-fatal manifest warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BrigadeResult<(Manifest, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> BrigadeResult<(Manifest, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BrigadeError::InvalidManifest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

/// Walk upward from `start` looking for `brigade.toml`.
pub fn discover(start: &Path) -> BrigadeResult<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        dir = current.parent();
    }
    Err(BrigadeError::ManifestNotFound {
        start: start.to_path_buf(),
    })
}

/// Apply environment variable overrides (BRIGADE_* prefix)
pub fn with_env_overrides(mut manifest: Manifest) -> Manifest {
    // BRIGADE_FORMAT
    if let Ok(format) = std::env::var("BRIGADE_FORMAT") {
        manifest.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    // BRIGADE_COLOR
    if let Ok(color) = std::env::var("BRIGADE_COLOR") {
        manifest.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // NO_COLOR wins over everything but the CLI flag
    if std::env::var_os("NO_COLOR").is_some() {
        manifest.output.color = ColorMode::Never;
    }

    // BRIGADE_SOURCE_ROOT
    if let Ok(root) = std::env::var("BRIGADE_SOURCE_ROOT") {
        if !root.trim().is_empty() {
            manifest.project.root = PathBuf::from(root);
        }
    }

    manifest
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "root",
        "crate_name",
        "check",
        "exclude",
        "include_unowned",
        "allow",
        "from",
        "to",
        "symbol",
        "reason",
        "output",
        "format",
        "color",
        "modules",
        "name",
        "path",
        "surface",
        "exports",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
