//! Command-line surface of the `shub` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect dynamic channel metadata seeded from configuration")]
pub(crate) struct Cli {
    /// Configuration file (TOML). Defaults to `shub.toml` in the working directory, if present
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List every channel with stored options or limits, sorted
    Channels {},
    /// Print the resolved state description of a channel as JSON
    Describe {
        /// Channel uid, e.g. 'intesisbox:wmp:livingroom:mode'
        uid: String,

        /// Original description to merge into, as JSON (e.g. '{"step": "0.5"}')
        #[arg(short, long)]
        base: Option<String>,
    },
}
