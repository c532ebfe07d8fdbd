pub mod cli;
pub mod cratesio;
pub mod runner;

pub use cli::Args;
pub use cratesio::{CratesIoClient, SelectionPolicy};
pub use runner::{init_logging, run};

// Re-export core types for convenience
pub use ms_updater_core::{DependencyEntry, EntryForm, ResolvedVersion, UpdateReport, VersionResolver};
