//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Cybersecurity awareness assistant
#[derive(Parser, Debug)]
#[command(name = "awareness")]
#[command(about = "Chat with a cybersecurity awareness assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with engine settings
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Seed for reply selection and quiz order (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log engine activity to stderr at debug level
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
