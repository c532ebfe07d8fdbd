/// Version chosen by a resolver. `None` keeps the manifest line unchanged.
pub type ResolvedVersion = Option<String>;

/// How a dependency was declared on its line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryForm {
    /// `name = "1.0"`
    BareString,
    /// `name = { version = "1.0", ... }`
    InlineTable {
        /// Everything between the version's closing quote and the last `}`,
        /// kept verbatim (leading comma and spaces included)
        trailing: String,
    },
}

/// A dependency declaration recognized on a single manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    /// Package name as written (`[a-z0-9_-]+`)
    pub name: String,
    /// Exact text between the version quotes
    pub declared_version: String,
    pub form: EntryForm,
}

/// A single rewritten entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub name: String,
    pub from: String,
    pub to: String,
}

/// Outcome of running the pipeline over a manifest
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    /// Entries that were rewritten, in file order
    pub updates: Vec<Update>,
    /// Number of registry lookups performed
    pub lookups: usize,
}

impl UpdateReport {
    /// Check if any entry was rewritten
    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }
}
