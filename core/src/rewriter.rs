use crate::types::{DependencyEntry, EntryForm};

/// Build the replacement for a matched line.
///
/// Returns `None` when there is nothing to do: no resolved version, an empty
/// one, or one byte-identical to the declared version. Otherwise prints
/// the `Updating` notice and returns the rebuilt line, always terminated by a
/// single `\n`.
pub fn rewrite_line(entry: &DependencyEntry, resolved: Option<&str>) -> Option<String> {
    let new_version = resolved.filter(|v| !v.is_empty() && *v != entry.declared_version)?;

    println!(
        "Updating {}: {} -> {new_version}",
        entry.name, entry.declared_version
    );

    Some(render(entry, new_version))
}

fn render(entry: &DependencyEntry, version: &str) -> String {
    match &entry.form {
        EntryForm::BareString => format!("{} = \"{version}\"\n", entry.name),
        EntryForm::InlineTable { trailing } => {
            format!("{} = {{ version = \"{version}\"{trailing}}}\n", entry.name)
        }
    }
}
