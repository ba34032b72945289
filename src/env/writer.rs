use crate::env::types::EnvMap;
use crate::error::{EnvMergeError, Result};
use std::path::Path;

/// Render variables as `KEY=VALUE` lines.
///
/// Without `sort`, lines follow the map's iteration order.
pub fn render_env(vars: &EnvMap, sort: bool) -> String {
	let mut entries: Vec<_> = vars.iter().collect();
	if sort {
		entries.sort_by(|a, b| a.0.cmp(b.0));
	}

	let mut output = String::new();
	for (key, value) in entries {
		output.push_str(key);
		output.push('=');
		output.push_str(value);
		output.push('\n');
	}
	output
}

/// Write variables to `path`, creating or truncating it.
pub fn write_env_file(path: &Path, vars: &EnvMap, sort: bool) -> Result<()> {
	std::fs::write(path, render_env(vars, sort)).map_err(|source| EnvMergeError::WriteError {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!("Wrote {} variables to {}", vars.len(), path.display());
	Ok(())
}
