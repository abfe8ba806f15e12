//! py_to_rpy CLI - convert Python files to Ren'Py files
//!
//! Each input is wrapped in an `init python:` block and written next to the
//! source (or into `--dest`). `--minify` merges the outputs into one file.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use py_to_rpy::{run, RuleSet, RunOptions, DEFAULT_RULES_FILE};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "py_to_rpy")]
#[command(version, about = "Convert Python files to Ren'Py files", long_about = None)]
struct Cli {
    /// List of files to convert (glob patterns are expanded)
    #[arg(required = true)]
    files: Vec<String>,

    /// The folder to place transpiled files into
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Skip lines matched by the rule file's `remove` prefixes
    #[arg(long)]
    strict: bool,

    /// Output rpy to one file with this name instead of multiple
    #[arg(long, value_name = "NAME")]
    minify: Option<String>,

    /// Rule file with ignore/remove/order lists
    #[arg(long, default_value = DEFAULT_RULES_FILE)]
    config: PathBuf,

    /// Log every dropped line and the resolved merge order
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "py_to_rpy=debug"
    } else if quiet {
        "py_to_rpy=warn"
    } else {
        "py_to_rpy=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = convert(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn convert(cli: Cli) -> py_to_rpy::Result<()> {
    let options = RunOptions {
        files: cli.files,
        dest: cli.dest,
        strict: cli.strict,
        minify: cli.minify,
    };

    // Rules only matter for strict filtering and combine ordering
    let rules = if options.needs_rules() {
        RuleSet::load_from_file(&cli.config)?
    } else {
        RuleSet::default()
    };

    let summary = run(&options, &rules)?;

    if !cli.quiet {
        if let Some(combined) = &summary.combined {
            println!("  ✓ Combined {} files into {}", summary.removed.len(), combined.display());
        } else {
            for produced in &summary.produced {
                println!("  ✓ Generated {}", produced.display());
            }
        }
    }

    Ok(())
}
