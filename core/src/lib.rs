pub mod error;
pub mod manifest;
pub mod matcher;
pub mod pipeline;
pub mod resolver;
pub mod rewriter;
pub mod section;
pub mod types;
pub mod version;

// Re-export commonly used types at crate root
pub use error::ManifestError;
pub use matcher::match_entry;
pub use pipeline::{update_lines, update_manifest};
pub use resolver::VersionResolver;
pub use rewriter::rewrite_line;
pub use section::SectionState;
pub use types::{DependencyEntry, EntryForm, ResolvedVersion, Update, UpdateReport};
pub use version::is_stable_release;
