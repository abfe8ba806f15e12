//! Rule loading and line-level filtering.

pub mod rules;
pub mod line_filter;

// Re-export key types
pub use rules::{RuleSet, DEFAULT_RULES_FILE};
pub use line_filter::{is_forbidden, LineFilter};
