use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use envmerge::env::{merge_env_files, write_env_file};

const USAGE: &str = "Usage: envmerge -o <output-file> <input-files...>";

#[derive(Parser)]
#[command(name = "envmerge")]
#[command(
	author,
	version,
	about = "CLI tool for merging env files, later files override earlier ones",
	after_help = "Exits with status 1 and reports the error on stderr if any input cannot be read or the output cannot be written."
)]
struct Cli {
	/// Output file for the merged variables
	#[arg(
		short,
		long,
		value_name = "FILE",
		default_value = "merged.env",
		env = "ENVMERGE_OUTPUT"
	)]
	output: PathBuf,

	/// Write output lines sorted by key
	#[arg(long)]
	sort: bool,

	/// Enable verbose logging (sets log level to DEBUG)
	#[arg(short, long)]
	verbose: bool,

	/// Env files to merge, in increasing precedence
	#[arg(value_name = "INPUT")]
	inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if cli.inputs.is_empty() {
		println!("{USAGE}");
		return ExitCode::SUCCESS;
	}

	match run(&cli.output, &cli.inputs, cli.sort) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error merging env files: {e:?}");
			ExitCode::FAILURE
		}
	}
}

// A set RUST_LOG replaces the default level entirely, --verbose included.
fn init_logging(verbose: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.try_init();
}

fn run(output: &Path, inputs: &[PathBuf], sort: bool) -> Result<()> {
	let merged = merge_env_files(inputs).context("Failed to merge input files")?;

	write_env_file(output, &merged.vars, sort)
		.with_context(|| format!("Failed to write {}", output.display()))?;

	tracing::info!(
		"Merged {} variables from {} files into {}",
		merged.len(),
		inputs.len(),
		output.display()
	);
	Ok(())
}
