//! Rule file loader.
//!
//! Loads the ignore/remove/order lists that drive strict-mode filtering and
//! combine ordering from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PyToRpyError, Result};

/// Name of the rule file looked up in the working directory.
pub const DEFAULT_RULES_FILE: &str = "py_to_rpy.json";

/// Rules read from the rule file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Line prefixes that are never dropped, even when also listed in `remove`
    pub ignore: Vec<String>,

    /// Line prefixes dropped in strict mode
    pub remove: Vec<String>,

    /// Canonical merge order of document names
    pub order: Vec<String>,
}

impl RuleSet {
    pub fn new(ignore: Vec<String>, remove: Vec<String>, order: Vec<String>) -> Self {
        Self {
            ignore,
            remove,
            order,
        }
    }

    /// Load rules from `py_to_rpy.json` in the current directory.
    pub fn load() -> Result<Self> {
        Self::load_from_file(DEFAULT_RULES_FILE)
    }

    /// Load rules from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the rule file
    ///
    /// # Errors
    /// Returns `PyToRpyError::Config` if the file doesn't exist, can't be read,
    /// or is not an object with `ignore`, `remove` and `order` string arrays
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| {
            PyToRpyError::config(path, format!("Failed to read rule file: {}", e))
        })?;

        let rules = Self::parse(&contents).map_err(|e| PyToRpyError::config(path, e))?;

        tracing::debug!(
            path = %path.display(),
            ignore = rules.ignore.len(),
            remove = rules.remove.len(),
            order = rules.order.len(),
            "Loaded rules"
        );

        Ok(rules)
    }

    /// Parse rules from an in-memory JSON document.
    ///
    /// Errors are reported against a `<inline>` pseudo-path.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json).map_err(|e| PyToRpyError::config("<inline>", e))
    }

    fn parse(json: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse rules: {}", e))
    }

    /// Position of `name` in the declared order, if listed.
    pub fn order_position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|entry| entry == name)
    }
}
