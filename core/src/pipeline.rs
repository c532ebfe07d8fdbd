use crate::error::ManifestError;
use crate::manifest::{read_lines, write_lines};
use crate::matcher::match_entry;
use crate::resolver::VersionResolver;
use crate::rewriter::rewrite_line;
use crate::section::SectionState;
use crate::types::{Update, UpdateReport};
use std::path::Path;

/// Run every line through the section tracker, matcher, resolver and rewriter.
///
/// Lines are processed strictly in order with one lookup at a time. Lines that
/// are not rewritten come back byte-for-byte.
pub async fn update_lines<R: VersionResolver>(
    lines: Vec<String>,
    resolver: &R,
) -> (Vec<String>, UpdateReport) {
    let mut section = SectionState::new();
    let mut report = UpdateReport::default();
    let mut output = Vec::with_capacity(lines.len());

    for line in lines {
        let trimmed = line.trim();

        if section.observe(trimmed)
            || !section.in_dependencies()
            || trimmed.is_empty()
            || trimmed.starts_with('#')
        {
            output.push(line);
            continue;
        }

        let Some(entry) = match_entry(trimmed) else {
            log::debug!("skipping unrecognized line: {trimmed}");
            output.push(line);
            continue;
        };

        let resolved = resolver.resolve(&entry.name).await;
        report.lookups += 1;

        let rewritten = rewrite_line(&entry, resolved.as_deref());
        match (rewritten, resolved) {
            (Some(rewritten), Some(to)) => {
                report.updates.push(Update {
                    name: entry.name,
                    from: entry.declared_version,
                    to,
                });
                output.push(rewritten);
            }
            _ => output.push(line),
        }
    }

    (output, report)
}

/// Read the manifest, update it and write it back in full.
///
/// The file is rewritten even when nothing changed.
pub async fn update_manifest<R: VersionResolver>(
    path: &Path,
    resolver: &R,
) -> Result<UpdateReport, ManifestError> {
    let lines = read_lines(path)?;
    let (lines, report) = update_lines(lines, resolver).await;
    write_lines(path, &lines)?;
    Ok(report)
}
