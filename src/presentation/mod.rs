//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text rendering
//! - `terminal` - Color and unicode detection

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_check_use_case;
pub use output::TextRenderer;
pub use terminal::OutputContext;
