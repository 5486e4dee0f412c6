use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use themeshift_cli::stylesheet::{RewriteReport, preview_file, rewrite_file};

/// The site stylesheet this tool was written to migrate.
const DEFAULT_STYLESHEET: &str = "wwwroot/css/app.css";

#[derive(Parser)]
#[command(name = "themeshift")]
#[command(
	author,
	version,
	about = "Migrate a stylesheet from media-query dark mode to attribute-driven theming"
)]
struct Cli {
	/// Stylesheet to migrate (defaults to the site stylesheet)
	#[arg(value_name = "STYLESHEET")]
	path: Option<PathBuf>,

	/// Run the full pipeline in memory and report outcomes without writing
	#[arg(long)]
	dry_run: bool,

	/// Print the outcome of every rewrite rule
	#[arg(long)]
	verbose: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let path = cli.path.unwrap_or_else(|| PathBuf::from(DEFAULT_STYLESHEET));

	if cli.dry_run {
		let report = preview_file(&path)
			.with_context(|| format!("Failed to preview {}", path.display()))?;

		print_outcomes(&report);
		if report.changed {
			println!("Dry run: {} would be rewritten.", report.path.display());
		} else {
			println!("Dry run: {} is already migrated.", report.path.display());
		}
		return Ok(ExitCode::SUCCESS);
	}

	let report =
		rewrite_file(&path).with_context(|| format!("Failed to update {}", path.display()))?;

	if cli.verbose {
		print_outcomes(&report);
	}

	println!("CSS file updated successfully!");
	Ok(ExitCode::SUCCESS)
}

fn print_outcomes(report: &RewriteReport) {
	for outcome in &report.outcomes {
		let status = if outcome.fired { "rewrote" } else { "no match" };
		println!("  {:<26} {}", outcome.name, status);
	}
}
