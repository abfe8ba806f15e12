//! # py_to_rpy: Python to Ren'Py transpiler
//!
//! Wraps plain Python files in an `init python:` block so Ren'Py can load
//! them as `.rpy` scripts.
//!
//! ## Features
//!
//! - **Transpile**: indent every non-blank line by four spaces under the header
//! - **Strict mode**: drop lines whose left-trimmed text starts with a `remove`
//!   prefix, unless an `ignore` prefix matches first
//! - **Combine**: merge several outputs into one file, honoring a declared order
//! - **Cleanup**: delete the per-file outputs after combining
//!
//! ## Example: rule file (`py_to_rpy.json`)
//!
//! ```json
//! {
//!   "ignore": ["import renpy.store"],
//!   "remove": ["import renpy", "from renpy"],
//!   "order": ["constants", "engine"]
//! }
//! ```

pub mod error;

// Rule loading and line filtering
pub mod runtime;

// Transpile, combine and cleanup
pub mod codegen;

// Command-line orchestration
pub mod pipeline;

// Re-export key types
pub use error::{PyToRpyError, Result};
pub use runtime::{is_forbidden, LineFilter, RuleSet, DEFAULT_RULES_FILE};
pub use codegen::{combine, remove_produced, resolve_output_path, transpile, HEADER};
pub use pipeline::{expand_inputs, run, RunOptions, RunSummary};
