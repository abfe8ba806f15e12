//! End-to-end run used by the command line: expand inputs, transpile each
//! file, then optionally combine and clean up.

use std::io;
use std::path::PathBuf;

use crate::codegen::{combine, remove_produced, transpile};
use crate::error::{PyToRpyError, Result};
use crate::runtime::RuleSet;

/// Inputs for a full run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Files or glob patterns to transpile
    pub files: Vec<String>,

    /// Directory to place transpiled files into
    pub dest: Option<PathBuf>,

    /// Drop lines matched by the rule set's `remove` prefixes
    pub strict: bool,

    /// Combine every output into this name and delete the per-file outputs
    pub minify: Option<String>,
}

impl RunOptions {
    /// Whether this run consults the rule file at all.
    pub fn needs_rules(&self) -> bool {
        self.strict || self.minify.is_some()
    }
}

/// What a run produced on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-file outputs, in input order
    pub produced: Vec<PathBuf>,

    /// Combined output, when minifying
    pub combined: Option<PathBuf>,

    /// Per-file outputs deleted after combining
    pub removed: Vec<PathBuf>,
}

/// Run the whole transpile/combine/cleanup sequence.
///
/// Stops at the first error; outputs written before it are left in place.
pub fn run(options: &RunOptions, rules: &RuleSet) -> Result<RunSummary> {
    let files = expand_inputs(&options.files)?;
    let dest = options.dest.as_deref();

    let mut summary = RunSummary::default();

    for file in &files {
        let output = transpile(file, dest, options.strict, rules)?;
        summary.produced.push(output);
    }

    if let Some(name) = &options.minify {
        summary.combined = Some(combine(&files, name, dest, rules)?);
        summary.removed = remove_produced(&files, dest)?;
    }

    Ok(summary)
}

/// Expand glob patterns into file paths.
///
/// Matches of each pattern are sorted; pattern order is kept. Arguments
/// without glob metacharacters, and patterns that match nothing, are passed
/// through unchanged so a missing file is reported by the transpile step.
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();

        if !pattern.contains(['*', '?', '[']) {
            files.push(pattern.to_string());
            continue;
        }

        let paths = glob::glob(pattern).map_err(|e| PyToRpyError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let mut matched: Vec<String> = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                PyToRpyError::io(path, io::Error::from(e))
            })?;
            if path.is_file() {
                matched.push(path.to_string_lossy().into_owned());
            }
        }
        matched.sort();

        if matched.is_empty() {
            tracing::warn!(pattern, "Pattern matched no files");
            files.push(pattern.to_string());
        } else {
            files.extend(matched);
        }
    }

    Ok(files)
}
