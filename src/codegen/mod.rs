//! File-producing operations: transpile `.py` files into `.rpy` files,
//! combine several outputs into one, and remove the intermediates.

pub mod paths;
pub mod transpiler;
pub mod combiner;
pub mod cleanup;

// Re-export key items
pub use paths::{ensure_dir, output_stem, resolve_output_path, OUTPUT_EXTENSION, SOURCE_EXTENSION};
pub use transpiler::{transpile, transpile_line, transpile_lines, HEADER, INDENT};
pub use combiner::{combine, resolve_order};
pub use cleanup::remove_produced;
