use crate::error::ManifestError;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file name looked up in the project directory
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Path of the manifest inside a project directory
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE)
}

/// Read the manifest as raw lines, each keeping its own terminator.
///
/// The last element has no terminator when the file does not end in one.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_lines(&content))
}

/// Split text into lines without dropping `\n` / `\r\n` terminators
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Overwrite the manifest with the given lines, in order.
///
/// Truncates in place: there is no temp file or backup, so an I/O error
/// partway through can leave the file shortened.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), ManifestError> {
    fs::write(path, lines.concat()).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}
