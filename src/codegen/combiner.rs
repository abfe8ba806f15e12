//! Combines per-file `.rpy` outputs into a single file.
//!
//! Names listed in the rule set's `order` come first, in that order; the rest
//! follow in the order given. Each contribution is preceded by a blank line
//! and the combined file carries a single `init python:` header.
//!
//! Only lines exactly equal to `init python:\n` are skipped when copying, so a
//! body line that happens to read `init python:` is dropped as well.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::codegen::paths::{is_same_path, output_stem, overwrite_error, resolve_output_path};
use crate::codegen::transpiler::HEADER;
use crate::error::{PyToRpyError, Result};
use crate::runtime::RuleSet;

/// Order `names` for combining.
///
/// Stable partition: names whose stem appears in `rules.order` first, sorted
/// by their position there, then every other name in its original position.
pub fn resolve_order<'a, S: AsRef<str>>(names: &'a [S], rules: &RuleSet) -> Vec<&'a str> {
    let mut declared: Vec<(usize, &str)> = Vec::new();
    let mut remainder: Vec<&str> = Vec::new();

    for name in names {
        let name = name.as_ref();
        match rules.order_position(&output_stem(name)) {
            Some(position) => declared.push((position, name)),
            None => remainder.push(name),
        }
    }

    declared.sort_by_key(|(position, _)| *position);

    declared
        .into_iter()
        .map(|(_, name)| name)
        .chain(remainder)
        .collect()
}

/// Combine already transpiled files into `output_name`.
///
/// The destination is opened in append mode, so combining twice into the same
/// name appends a second copy.
///
/// # Arguments
/// * `names` - Names or source paths whose outputs should be merged
/// * `output_name` - Name of the combined file (resolved like any other name)
/// * `dest` - Directory holding the per-file outputs and the combined file
/// * `rules` - Supplies the declared merge order
///
/// # Errors
/// Returns `PyToRpyError::Io` if any per-file output is missing, the combined
/// file can't be written, or the combined file would be one of the parts
pub fn combine<S: AsRef<str>>(
    names: &[S],
    output_name: &str,
    dest: Option<&Path>,
    rules: &RuleSet,
) -> Result<PathBuf> {
    let output = resolve_output_path(output_name, dest);
    let ordered = resolve_order(names, rules);

    tracing::debug!(order = ?ordered, "Resolved combine order");

    let parts: Vec<PathBuf> = ordered
        .iter()
        .map(|name| resolve_output_path(name, dest))
        .collect();
    if let Some(part) = parts.iter().find(|part| is_same_path(&output, part)) {
        return Err(overwrite_error(&output, part));
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&output)
        .map_err(|e| PyToRpyError::io(&output, e))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER).map_err(|e| PyToRpyError::io(&output, e))?;

    for part in &parts {
        append_part(&mut writer, part, &output)?;
    }

    writer.flush().map_err(|e| PyToRpyError::io(&output, e))?;

    tracing::info!(output = %output.display(), parts = parts.len(), "Combined");

    Ok(output)
}

fn append_part<W: Write>(writer: &mut W, part: &Path, output: &Path) -> Result<()> {
    let file = File::open(part).map_err(|e| PyToRpyError::io(part, e))?;
    let mut reader = BufReader::new(file);

    writeln!(writer).map_err(|e| PyToRpyError::io(output, e))?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| PyToRpyError::io(part, e))?;
        if read == 0 {
            break;
        }

        if line.strip_suffix('\n') == Some(HEADER) {
            continue;
        }

        writer
            .write_all(line.as_bytes())
            .map_err(|e| PyToRpyError::io(output, e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rules_with_order(order: &[&str]) -> RuleSet {
        RuleSet::new(vec![], vec![], order.iter().map(|s| s.to_string()).collect())
    }

    fn write_part(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(format!("{}.rpy", name)), format!("init python:\n{}", body)).unwrap();
    }

    #[test]
    fn test_resolve_order_declared_first() {
        let rules = rules_with_order(&["b", "a"]);
        assert_eq!(resolve_order(&["a", "b", "c"], &rules), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_resolve_order_remainder_keeps_input_order() {
        let rules = rules_with_order(&["z"]);
        assert_eq!(
            resolve_order(&["d", "c", "z", "a"], &rules),
            vec!["z", "d", "c", "a"]
        );
    }

    #[test]
    fn test_resolve_order_matches_stems() {
        let rules = rules_with_order(&["second", "first"]);
        let names = vec!["src/first.py".to_string(), "src/second.py".to_string()];
        assert_eq!(resolve_order(&names, &rules), vec!["src/second.py", "src/first.py"]);
    }

    #[test]
    fn test_resolve_order_empty_rules() {
        let rules = RuleSet::default();
        assert_eq!(resolve_order(&["c", "a", "b"], &rules), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_combine_order_and_single_header() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_part(dir, "a", "    a = 1\n");
        write_part(dir, "b", "    b = 2\n");
        write_part(dir, "c", "    c = 3\n");

        let output = combine(&["a", "b", "c"], "combined", Some(dir), &rules_with_order(&["b", "a"]))
            .unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(
            contents,
            "init python:\n\n    b = 2\n\n    a = 1\n\n    c = 3\n"
        );
        assert_eq!(contents.matches(HEADER).count(), 1);
    }

    #[test]
    fn test_combine_empty_names() {
        let temp_dir = TempDir::new().unwrap();
        let names: [&str; 0] = [];

        let output = combine(&names, "empty", Some(temp_dir.path()), &RuleSet::default()).unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "init python:\n");
    }

    #[test]
    fn test_combine_appends_on_second_call() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_part(dir, "a", "    a = 1\n");

        combine(&["a"], "all", Some(dir), &RuleSet::default()).unwrap();
        let output = combine(&["a"], "all", Some(dir), &RuleSet::default()).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "init python:\n\n    a = 1\ninit python:\n\n    a = 1\n"
        );
    }

    #[test]
    fn test_combine_missing_part() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_part(dir, "a", "    a = 1\n");

        let err = combine(&["a", "ghost"], "all", Some(dir), &RuleSet::default()).unwrap_err();

        assert!(matches!(err, PyToRpyError::Io { ref path, .. } if path == &dir.join("ghost.rpy")));
    }

    #[test]
    fn test_combine_refuses_output_equal_to_part() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_part(dir, "a", "    a = 1\n");
        write_part(dir, "b", "    b = 2\n");

        let err = combine(&["b", "a"], "a", Some(dir), &RuleSet::default()).unwrap_err();

        assert!(matches!(err, PyToRpyError::Io { ref path, .. } if path == &dir.join("a.rpy")));
        assert_eq!(fs::read_to_string(dir.join("a.rpy")).unwrap(), "init python:\n    a = 1\n");
    }

    #[test]
    fn test_combine_header_match_is_exact() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("a.rpy"), "init python:\r\n    a = 1\ninit python:").unwrap();

        let output = combine(&["a"], "all", Some(dir), &RuleSet::default()).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "init python:\n\ninit python:\r\n    a = 1\ninit python:"
        );
    }

    #[test]
    fn test_combine_drops_literal_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_part(dir, "a", "    x = 'init python:'\ninit python:\n    init python: \n");

        let output = combine(&["a"], "all", Some(dir), &RuleSet::default()).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "init python:\n\n    x = 'init python:'\n    init python: \n"
        );
    }
}
