#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use shub_domain::config::{AppConfig, LoggingConfig};
use shub_kernel::config::load_config;
use shub_logger::{LevelFilter, Logger};
use shub_metadata::MetadataStore;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _logger = init_logging(&cfg.logging)?;
    info!(path = ?cli.config, channels = cfg.metadata.channels.len(), "Configuration loaded");

    let store = MetadataStore::from_config(&cfg.metadata)
        .context("Failed to seed the metadata store")?;

    match cli.command {
        Command::Channels {} => handlers::channels::list_channels(&store),
        Command::Describe { uid, base } => {
            handlers::describe::describe_channel(&store, &uid, base.as_deref())?;
        },
    }

    Ok(())
}

fn init_logging(cfg: &LoggingConfig) -> Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid log level '{}'", cfg.level))?;

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let builder = match &cfg.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let logger = match &cfg.directory {
        Some(directory) if cfg.json => builder.path(directory).json().init(),
        Some(directory) => builder.path(directory).init(),
        None => builder.init(),
    }?;

    Ok(logger)
}
