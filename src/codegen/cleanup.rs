//! Removal of per-file outputs once they have been combined.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::paths::resolve_output_path;
use crate::error::{PyToRpyError, Result};

/// Delete the resolved `.rpy` output of every name.
///
/// Stops at the first failure; files removed before it stay removed.
///
/// # Errors
/// Returns `PyToRpyError::Io` if any output is missing or can't be removed
pub fn remove_produced<S: AsRef<str>>(names: &[S], dest: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::with_capacity(names.len());

    for name in names {
        let path = resolve_output_path(name.as_ref(), dest);
        fs::remove_file(&path).map_err(|e| PyToRpyError::io(&path, e))?;
        tracing::info!(path = %path.display(), "Removed");
        removed.push(path);
    }

    Ok(removed)
}
