use std::path::PathBuf;

/// Library-level structured errors for envmerge.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum EnvMergeError {
	#[error("Failed to read env file: {path}")]
	ReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write env file: {path}")]
	WriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using EnvMergeError.
pub type Result<T> = std::result::Result<T, EnvMergeError>;
