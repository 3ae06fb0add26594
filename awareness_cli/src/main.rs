//! Awareness - terminal front end for the cybersecurity awareness assistant.

use anyhow::{Context, Result};
use awareness_rules::EngineConfig;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod repl;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    info!(bot = %config.bot_name, seeded = config.seed.is_some(), "starting assistant");

    repl::run(&config)
}
