//! Brigade CLI - module boundary checker
//!
//! Usage: brigade <COMMAND>
//!
//! Commands:
//!   check    Check that no module reaches into another module's internals
//!   modules  List declared modules and their public surfaces
//!   explain  Explain the module convention

use anyhow::Result;
use clap::Parser;

use brigade::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let globals = commands::Globals {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        manifest: cli.manifest,
    };

    match cli.command {
        Commands::Check { warn_only } => commands::check::cmd_check(&globals, warn_only),
        Commands::Modules => commands::modules::cmd_modules(&globals),
        Commands::Explain { brief } => commands::explain::cmd_explain(brief, globals.json),
    }
}
