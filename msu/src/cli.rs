use crate::cratesio::DEFAULT_REGISTRY;
use clap::Parser;
use std::path::PathBuf;

/// Bump Cargo.toml dependencies to the newest versions on crates.io
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to project directory (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Registry base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_REGISTRY)]
    pub registry: String,

    /// Look up and report updates without writing Cargo.toml
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Get the project path, defaulting to current directory
    pub fn project_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
