//! Python to Ren'Py transpiler.
//!
//! Wraps a Python file in an `init python:` block: every non-blank line is
//! indented by four spaces, blank lines are normalized to a bare newline and,
//! in strict mode, lines rejected by the [`LineFilter`] are dropped.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::codegen::paths::{ensure_dir, is_same_path, overwrite_error, resolve_output_path};
use crate::error::{PyToRpyError, Result};
use crate::runtime::{LineFilter, RuleSet};

/// Block header recognized by Ren'Py
pub const HEADER: &str = "init python:";

/// Indent applied to every non-blank line
pub const INDENT: &str = "    ";

/// Transpile one Python file into a `.rpy` file.
///
/// # Arguments
/// * `source` - Path to the Python file
/// * `dest` - Optional destination directory (created if missing)
/// * `strict` - Drop lines matched by the rule set's `remove` prefixes
/// * `rules` - Rules consulted in strict mode
///
/// # Returns
/// Path of the produced file
///
/// # Errors
/// Returns `PyToRpyError::Filesystem` if the destination can't be created and
/// `PyToRpyError::Io` if the source can't be read, the output can't be written,
/// or the output would replace the source
pub fn transpile<P: AsRef<Path>>(
    source: P,
    dest: Option<&Path>,
    strict: bool,
    rules: &RuleSet,
) -> Result<PathBuf> {
    let source = source.as_ref();

    if let Some(dir) = dest {
        ensure_dir(dir)?;
    }
    let output = resolve_output_path(source, dest);
    if is_same_path(&output, source) {
        return Err(overwrite_error(&output, source));
    }

    let input = File::open(source).map_err(|e| PyToRpyError::io(source, e))?;
    let file = File::create(&output).map_err(|e| PyToRpyError::io(&output, e))?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(file);
    let filter = LineFilter::new(rules, strict);

    writeln!(writer, "{}", HEADER).map_err(|e| PyToRpyError::io(&output, e))?;

    let mut line = String::new();
    let mut dropped = 0usize;
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| PyToRpyError::io(source, e))?;
        if read == 0 {
            break;
        }

        match transpile_line(&line, &filter) {
            Some(out) => writer
                .write_all(out.as_bytes())
                .map_err(|e| PyToRpyError::io(&output, e))?,
            None => {
                dropped += 1;
                tracing::debug!(source = %source.display(), line = line.trim_end(), "Dropped line");
            }
        }
    }

    writer.flush().map_err(|e| PyToRpyError::io(&output, e))?;

    tracing::info!(
        source = %source.display(),
        output = %output.display(),
        dropped,
        "Transpiled"
    );

    Ok(output)
}

/// Transpile a single source line, keeping its line terminator.
///
/// Returns `None` when the filter drops the line.
pub fn transpile_line<'a>(line: &'a str, filter: &LineFilter<'_>) -> Option<Cow<'a, str>> {
    if !filter.keeps(line) {
        return None;
    }

    if line.trim().is_empty() {
        Some(Cow::Borrowed("\n"))
    } else {
        Some(Cow::Owned(format!("{}{}", INDENT, line)))
    }
}

/// Transpile in-memory lines, header included.
///
/// Each input line should carry its own terminator, as read from a file.
pub fn transpile_lines<'a, I>(lines: I, filter: &LineFilter<'_>) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = vec![format!("{}\n", HEADER)];
    out.extend(
        lines
            .into_iter()
            .filter_map(|line| transpile_line(line, filter))
            .map(Cow::into_owned),
    );
    out
}
