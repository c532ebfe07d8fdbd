/// Section headers whose entries are dependency declarations.
/// Matched as literal prefixes of the trimmed header line.
const DEPENDENCY_SECTIONS: [&str; 3] = ["[dependencies]", "[dev-dependencies]", "[build-dependencies]"];

/// Tracks whether the current manifest line lies inside a dependency section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionState {
    in_dependencies: bool,
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if lines are currently being read inside a dependency section
    pub fn in_dependencies(self) -> bool {
        self.in_dependencies
    }

    /// Feed the trimmed text of the next line.
    ///
    /// Returns `true` when the line is a `[...]` header. Headers recompute the
    /// state; every other line leaves it as it was.
    pub fn observe(&mut self, trimmed: &str) -> bool {
        if !is_header(trimmed) {
            return false;
        }

        self.in_dependencies = DEPENDENCY_SECTIONS
            .iter()
            .any(|section| trimmed.starts_with(section));
        log::debug!(
            "section {trimmed}: {}",
            if self.in_dependencies { "dependencies" } else { "other" }
        );
        true
    }
}

fn is_header(trimmed: &str) -> bool {
    trimmed.starts_with('[') && trimmed.ends_with(']')
}
