use std::path::PathBuf;

/// Library-level structured errors for themeshift.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ThemeshiftError {
	#[error("Failed to read stylesheet: {path}")]
	StylesheetRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write stylesheet: {path}")]
	StylesheetWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid pattern in rewrite rule: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using ThemeshiftError.
pub type Result<T> = std::result::Result<T, ThemeshiftError>;
