//! Source file I/O with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", path.display()))))
}

/// Overwrite a source file in place. No backup is kept.
pub fn overwrite_source(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("write {}", path.display()))))
}

/// Overwrite only when `updated` differs from `original`. Returns whether the file was written.
pub fn overwrite_if_changed(path: &Path, original: &str, updated: &str) -> Result<bool> {
    if original == updated {
        return Ok(false);
    }
    overwrite_source(path, updated)?;
    Ok(true)
}
