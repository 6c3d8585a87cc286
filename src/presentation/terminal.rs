//! Terminal capability detection

use is_terminal::IsTerminal;

use crate::config::{ColorMode, Manifest, OutputFormat};

use super::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl OutputContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, manifest: &Manifest) -> Self {
        Self::from_env(
            json,
            verbose,
            cli_color,
            manifest,
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    pub(crate) fn from_env(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        manifest: &Manifest,
        get_env: impl Fn(&str) -> Option<String>,
        is_tty: bool,
    ) -> Self {
        let json = json || manifest.output.format == OutputFormat::Json;
        let term = get_env("TERM").unwrap_or_default();
        let dumb = term.eq_ignore_ascii_case("dumb");

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match manifest.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => is_tty && !dumb && get_env("NO_COLOR").is_none(),
            },
        };

        let unicode = !dumb
            && ["LC_ALL", "LC_CTYPE", "LANG"]
                .iter()
                .filter_map(|k| get_env(k))
                .find(|v| !v.is_empty())
                .map(|v| {
                    let v = v.to_uppercase();
                    v.contains("UTF-8") || v.contains("UTF8")
                })
                .unwrap_or(cfg!(windows));

        Self {
            json,
            verbose,
            color,
            unicode,
        }
    }
}
