//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use verity_core::Mode;

use crate::config::STDIN_PATH;

#[derive(Debug, Parser)]
#[command(name = "verity", version, about = "Render content-analysis text as safe HTML")]
pub struct Cli {
    /// Enable debug logging (overridden by VERITY_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format raw analysis text into an HTML fragment
    Format {
        /// Rule set: summary or analysis
        #[arg(short, long, default_value_t = Mode::Analysis)]
        mode: Mode,

        /// Input file ("-" or absent reads stdin)
        file: Option<PathBuf>,
    },

    /// Render a full analysis response document (JSON)
    Render {
        /// Print the rendered fragments as JSON instead of HTML
        #[arg(long)]
        json: bool,

        /// Input file ("-" or absent reads stdin)
        file: Option<PathBuf>,
    },

    /// Validate a source URL and show how it would be classified
    Inspect {
        /// URL submitted for analysis
        url: String,
    },
}

/// Resolve an optional path argument; `None` means stdin.
pub fn input_path(file: Option<PathBuf>) -> Option<PathBuf> {
    file.filter(|path| path.as_os_str() != STDIN_PATH)
}
