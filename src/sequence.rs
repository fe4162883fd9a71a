//! Sequence file loading and discovery.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while scanning sequence files.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input directory not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to render document: {0}")]
    Render(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Default extension of sequence files picked up by a batch scan.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Build a sequence buffer from raw file content.
///
/// Spaces and line breaks are removed everywhere, then any remaining
/// leading/trailing whitespace is trimmed. Tabs inside the sequence are kept.
pub fn normalize_sequence(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|&c| c != ' ' && c != '\n' && c != '\r')
        .collect();
    stripped.trim().to_string()
}

/// Read a sequence file into a normalized buffer.
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_sequence(&raw))
}

/// Read a normalized sequence buffer from any reader (e.g. stdin).
pub fn read_sequence_from<R: Read>(mut reader: R) -> Result<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(normalize_sequence(&raw))
}

/// List the sequence files directly inside `dir`.
///
/// Only regular files whose name ends with `extension` are returned, sorted
/// by file name.
pub fn list_sequence_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ScanError::MissingInput(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| ScanError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::debug!("Skipping non UTF-8 entry {}", path.display());
            continue;
        };
        if !name.ends_with(extension) {
            continue;
        }
        if !entry.file_type()?.is_file() && !path.is_file() {
            log::debug!("Skipping {}: not a regular file", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name of `path` as a string, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
