//! Stylesheet loading, rewriting, and write-back.
//!
//! The file is read in full before any modification and written exactly
//! once, after every rule has run, to the same path it was read from.

use crate::error::{Result, ThemeshiftError};
use crate::rules::{RuleOutcome, apply_rules, migration_rules};
use std::path::{Path, PathBuf};

/// Result of running the migration plan against one stylesheet.
#[derive(Debug)]
pub struct RewriteReport {
	/// The stylesheet path.
	pub path: PathBuf,

	/// Per-rule outcomes, in plan order.
	pub outcomes: Vec<RuleOutcome>,

	/// Whether the final content differs from what was read.
	pub changed: bool,
}

/// Run the migration plan over in-memory content.
pub fn rewrite_content(content: &str) -> Result<(String, Vec<RuleOutcome>)> {
	let rules = migration_rules()?;
	Ok(apply_rules(content, &rules))
}

/// Rewrite the stylesheet at `path` in place.
///
/// The write is unconditional: a run where no rule fired still rewrites the
/// file with identical content.
pub fn rewrite_file(path: &Path) -> Result<RewriteReport> {
	let content = read_stylesheet(path)?;
	let (updated, outcomes) = rewrite_content(&content)?;

	std::fs::write(path, &updated).map_err(|source| ThemeshiftError::StylesheetWrite {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(RewriteReport {
		path: path.to_path_buf(),
		outcomes,
		changed: updated != content,
	})
}

/// Run the migration plan against `path` without writing anything.
pub fn preview_file(path: &Path) -> Result<RewriteReport> {
	let content = read_stylesheet(path)?;
	let (updated, outcomes) = rewrite_content(&content)?;

	Ok(RewriteReport {
		path: path.to_path_buf(),
		outcomes,
		changed: updated != content,
	})
}

fn read_stylesheet(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| ThemeshiftError::StylesheetRead {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	// LF template converted to CRLF by `fixture()`; the real stylesheet is CRLF.
	const FIXTURE_TEMPLATE: &str = r#"/* Site stylesheet */

:root {
    --color-primary: #0d59f2;
    --color-bg-light: #ffffff;
    --color-card-light: #ffffff;
    --color-text-light: #333333;
    --color-text-gray-light: #6b7280;
    --color-border-light: #e5e7eb;
}

body {
    font-family: var(--font-family-display);
    font-size: 16px;
    line-height: 1.5;
    color: var(--color-text-light);
    background-color: var(--color-bg-light);
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

.header {
    position: sticky;
    top: 0;
    z-index: 50;
    background-color: rgba(255, 255, 255, 0.8);
    border-bottom: 1px solid var(--color-border-light);
}

.nav-brand {
    color: var(--color-text-light);
}

.nav-link {
    color: var(--color-text-gray-light);
}

.card {
    background-color: var(--color-card-light);
    border-bottom: 1px solid var(--color-border-light);
}

/* Dark mode support */
@media (prefers-color-scheme: dark) {
    body {
        background-color: #0d1117;
        color: #e5e7eb;
    }
}

@media (prefers-color-scheme: dark) {
    .header {
        background-color: rgba(13, 17, 23, 0.8);
    }
}

@media (prefers-color-scheme: dark) {
    .nav-brand {
        color: #ffffff;
    }
}

@media (prefers-color-scheme: dark) {
    .nav-link {
        color: #9ca3af;
    }
}
"#;

	fn fixture() -> String {
		FIXTURE_TEMPLATE.replace('\n', "\r\n")
	}

	#[test]
	fn test_root_block_is_replaced_with_themed_block() {
		let (output, _) = rewrite_content(&fixture()).unwrap();

		assert!(output.contains("--color-header-bg: rgba(255, 255, 255, 0.8);"));
		assert!(output.contains("/* Dark Mode Theme */"));
		assert!(output.contains("[data-theme=\"dark\"] {"));
		// The old variable declarations went with the old block
		assert!(!output.contains("--color-bg-light"));
		assert!(!output.contains("--color-card-light"));
	}

	#[test]
	fn test_variable_references_are_renamed() {
		let (output, _) = rewrite_content(&fixture()).unwrap();

		for old in [
			"var(--color-bg-light)",
			"var(--color-card-light)",
			"var(--color-text-light)",
			"var(--color-text-gray-light)",
			"var(--color-border-light)",
		] {
			assert_eq!(output.matches(old).count(), 0, "{old} should be gone");
		}

		assert_eq!(output.matches("var(--color-card-bg)").count(), 1);
		assert_eq!(output.matches("var(--color-text-secondary)").count(), 1);
		// body + .nav-brand
		assert_eq!(output.matches("var(--color-text-primary)").count(), 2);
		// .header + .card, each on a border-bottom declaration
		assert_eq!(output.matches("var(--color-border)").count(), 2);
	}

	#[test]
	fn test_dark_media_queries_are_removed() {
		let (output, _) = rewrite_content(&fixture()).unwrap();

		assert_eq!(output.matches("prefers-color-scheme").count(), 0);
		assert!(!output.contains("/* Dark mode support */"));
		assert!(output.contains("[data-theme=\"dark\"] .nav-brand {\r\n    color: white;\r\n}"));
	}

	#[test]
	fn test_transitions_are_inserted_at_anchors() {
		let (output, _) = rewrite_content(&fixture()).unwrap();

		assert_eq!(
			output
				.matches("transition: background-color 0.3s ease, color 0.3s ease;")
				.count(),
			1
		);
		assert_eq!(
			output
				.matches("transition: background-color 0.3s ease, border-color 0.3s ease;")
				.count(),
			1
		);
		assert!(output.contains("background-color: var(--color-header-bg);"));
		// .card keeps a bare border-bottom; only the header's gained a transition
		assert_eq!(
			output.matches("border-bottom: 1px solid var(--color-border);").count(),
			2
		);
	}

	#[test]
	fn test_every_rule_fires_on_the_full_fixture() {
		let (_, outcomes) = rewrite_content(&fixture()).unwrap();
		for outcome in &outcomes {
			assert!(outcome.fired, "rule {} did not fire", outcome.name);
		}
	}

	#[test]
	fn test_second_pass_changes_nothing() {
		let (once, _) = rewrite_content(&fixture()).unwrap();
		let (twice, outcomes) = rewrite_content(&once).unwrap();

		assert_eq!(once, twice);
		assert!(outcomes.iter().all(|o| !o.fired));
	}

	#[test]
	fn test_missing_root_marker_leaves_other_rules_intact() {
		let full = fixture();
		let root_start = full.find(":root").unwrap();
		let root_end = full[root_start..].find("\r\n}").unwrap() + root_start + 3;
		let without_root = format!("{}{}", &full[..root_start], &full[root_end..]);

		let (output, outcomes) = rewrite_content(&without_root).unwrap();

		let root_outcome = outcomes.iter().find(|o| o.name == "replace-root-variables").unwrap();
		assert!(!root_outcome.fired);
		assert!(!output.contains("/* Dark Mode Theme */"));
		// Renames and insertions still apply
		assert!(!output.contains("var(--color-bg-light)"));
		assert!(output.contains("transition: background-color 0.3s ease, color 0.3s ease;"));
	}

	#[test]
	fn test_rewrite_file_round_trip() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("app.css");
		std::fs::write(&path, fixture()).unwrap();

		let report = rewrite_file(&path).unwrap();
		assert!(report.changed);

		let on_disk = std::fs::read_to_string(&path).unwrap();
		assert!(on_disk.contains("[data-theme=\"dark\"] {"));

		// Re-running rewrites the file with identical content
		let report = rewrite_file(&path).unwrap();
		assert!(!report.changed);
		assert_eq!(std::fs::read_to_string(&path).unwrap(), on_disk);
	}

	#[test]
	fn test_preview_does_not_touch_the_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("app.css");
		std::fs::write(&path, fixture()).unwrap();

		let report = preview_file(&path).unwrap();
		assert!(report.changed);
		assert_eq!(std::fs::read_to_string(&path).unwrap(), fixture());
	}

	#[test]
	fn test_missing_file_is_a_read_error() {
		let result = rewrite_file(Path::new("/nonexistent/app.css"));
		match result.unwrap_err() {
			ThemeshiftError::StylesheetRead { path, .. } => {
				assert_eq!(path, Path::new("/nonexistent/app.css"));
			}
			other => panic!("Expected StylesheetRead error, got {other:?}"),
		}
	}
}
