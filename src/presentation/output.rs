//! Output Rendering
//!
//! Renders check reports and module listings as text. Renderers return a
//! `String` so commands decide where it goes.

use std::fmt::Write as _;

use crossterm::style::Stylize;

use crate::application::CheckReport;
use crate::domain::entities::ModuleDecl;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            arrow: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[WARN]",
            arrow: "->",
        }
    }
}

/// Text renderer for check results
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn yellow(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dark_grey().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render_check(&self, report: &CheckReport) -> String {
        let icons = self.icons();
        let mut out = String::new();

        for violation in &report.violations {
            let _ = writeln!(out, "{}", violation);
        }

        if self.verbose > 0 {
            for allowed in &report.allowed {
                let reason = allowed
                    .reason
                    .as_deref()
                    .map(|r| format!(" ({})", r))
                    .unwrap_or_default();
                let _ = writeln!(out, "{}", self.dim(&format!("allowed: {}{}", allowed.violation, reason)));
            }
        }

        for skipped in &report.skipped {
            let _ = writeln!(
                out,
                "{} skipped {}: {}",
                self.yellow(icons.warn),
                skipped.path.display(),
                skipped.reason
            );
        }

        if !out.is_empty() {
            out.push('\n');
        }

        let summary = format!(
            "{} modules, {} files, {} references",
            report.modules, report.files, report.references
        );
        if report.is_clean() {
            let _ = writeln!(out, "{} No boundary violations", self.green(icons.check));
        } else {
            let noun = if report.violations.len() == 1 {
                "violation"
            } else {
                "violations"
            };
            let _ = writeln!(
                out,
                "{} {} boundary {}",
                self.red(icons.cross),
                report.violations.len(),
                noun
            );
        }
        let _ = write!(out, "  {}", summary);
        if !report.allowed.is_empty() {
            let _ = write!(out, ", {} allowed", report.allowed.len());
        }
        out.push('\n');
        out
    }

    pub fn render_modules(&self, modules: &[ModuleDecl]) -> String {
        let icons = self.icons();
        let mut out = String::new();
        if modules.is_empty() {
            out.push_str("No modules declared\n");
            return out;
        }
        for module in modules {
            let _ = writeln!(out, "{} {} {}", module.name, self.dim(icons.arrow), module.path);
            let surface: Vec<String> = module
                .surface
                .iter()
                .map(|s| format!("{}::{}", module.path, s))
                .collect();
            let _ = writeln!(out, "  surface: {}", surface.join(", "));
            if !module.exports.is_empty() {
                let _ = writeln!(out, "  exports: {}", module.exports.join(", "));
            }
        }
        out
    }
}

/// JSON document for `brigade modules --json`
pub fn modules_json(modules: &[ModuleDecl]) -> serde_json::Value {
    serde_json::Value::Array(
        modules
            .iter()
            .map(|m| {
                serde_json::json!({
                    "name": m.name.as_str(),
                    "path": m.path.to_string(),
                    "surface": m.surface,
                    "exports": m.exports,
                })
            })
            .collect(),
    )
}
