//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --manifest) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Brigade - module isolation for monoliths
#[derive(Parser, Debug)]
#[command(name = "brigade")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'brigade explain' for an overview of the module convention.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to brigade.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that no module reaches into another module's internals
    Check {
        /// Report violations but exit successfully
        #[arg(long)]
        warn_only: bool,
    },

    /// List declared modules and their public surfaces
    Modules,

    /// Explain the module convention
    Explain {
        /// Short version
        #[arg(long)]
        brief: bool,
    },
}
