//! Output path resolution and destination directory handling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PyToRpyError, Result};

/// Extension of the files being transpiled
pub const SOURCE_EXTENSION: &str = "py";

/// Extension of every produced file
pub const OUTPUT_EXTENSION: &str = "rpy";

/// Resolve where the output for `name` lives.
///
/// `name` may be a bare document name (`"a"`) or a source path
/// (`"folder/a.py"`). With a destination only the file name is kept and
/// placed inside `dest`; without one the output sits next to `name`. A `.py`
/// extension is replaced with `.rpy`; any other name gets `.rpy` appended, so
/// `x.rpy` resolves to `x.rpy.rpy` and never to itself.
pub fn resolve_output_path<P: AsRef<Path>>(name: P, dest: Option<&Path>) -> PathBuf {
    let name = name.as_ref();

    let base = match dest {
        Some(dir) => match name.file_name() {
            Some(file_name) => dir.join(file_name),
            None => dir.join(name),
        },
        None => name.to_path_buf(),
    };

    let mut file_name = output_stem(&base);
    file_name.push('.');
    file_name.push_str(OUTPUT_EXTENSION);
    base.with_file_name(file_name)
}

/// Document name of `name`: its file name minus a `.py` extension.
pub fn output_stem<P: AsRef<Path>>(name: P) -> String {
    let name = name.as_ref();

    let Some(file_name) = name.file_name() else {
        return name.to_string_lossy().into_owned();
    };

    if name.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
        if let Some(stem) = name.file_stem() {
            return stem.to_string_lossy().into_owned();
        }
    }

    file_name.to_string_lossy().into_owned()
}

/// True if `a` and `b` name the same file, directly or after resolving links.
pub fn is_same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }

    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Error for an operation that would write over one of its own inputs.
pub(crate) fn overwrite_error(path: &Path, input: &Path) -> PyToRpyError {
    PyToRpyError::io(
        path,
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output would overwrite input {}", input.display()),
        ),
    )
}

/// Create `dir` and any missing parents.
///
/// Returns true if the directory was created, false if it already existed.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();

    if dir.is_dir() {
        return Ok(false);
    }

    match fs::create_dir_all(dir) {
        Ok(()) => {
            tracing::debug!(dir = %dir.display(), "Created destination directory");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(PyToRpyError::Filesystem {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
