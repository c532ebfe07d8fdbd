use crate::types::{DependencyEntry, EntryForm};
use regex::Regex;
use std::sync::LazyLock;

/// `name = { version = "V" <trailing> }`. The greedy trailing group runs to
/// the last `}` on the line.
static INLINE_TABLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r#"^([a-z0-9_-]+)\s*=\s*\{\s*version\s*=\s*"([^"]+)"(.*)\}"#));

/// `name = "V"`
static BARE_STRING: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r#"^([a-z0-9_-]+)\s*=\s*"([^"]+)""#));

/// A pattern that fails to compile matches nothing instead of panicking
fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| log::error!("Failed to compile entry pattern {pattern}: {e}"))
        .ok()
}

/// Classify a trimmed line from inside a dependency section.
///
/// Returns `None` for anything that is neither form (multi-line arrays, dotted
/// keys, `path`/`git` tables without a leading `version`, ...). Those lines are
/// passed through untouched by the caller.
pub fn match_entry(trimmed: &str) -> Option<DependencyEntry> {
    if let Some(caps) = INLINE_TABLE.as_ref().and_then(|re| re.captures(trimmed)) {
        return Some(DependencyEntry {
            name: caps[1].to_string(),
            declared_version: caps[2].to_string(),
            form: EntryForm::InlineTable {
                trailing: caps[3].to_string(),
            },
        });
    }

    let caps = BARE_STRING.as_ref()?.captures(trimmed)?;
    Some(DependencyEntry {
        name: caps[1].to_string(),
        declared_version: caps[2].to_string(),
        form: EntryForm::BareString,
    })
}
