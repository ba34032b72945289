use crate::env::parser::parse_env_file;
use crate::env::types::{LoadedEnv, MergedEnv};
use crate::error::Result;
use std::path::Path;

/// Parse every env file, keeping the order given.
///
/// Stops at the first file that cannot be read.
pub fn load_env_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LoadedEnv>> {
	let mut loaded = Vec::with_capacity(paths.len());

	for path in paths {
		let path = path.as_ref();
		let vars = parse_env_file(path)?;
		tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());

		loaded.push(LoadedEnv {
			vars,
			path: path.to_path_buf(),
		});
	}

	Ok(loaded)
}

/// Merge multiple parsed env files into a single set of variables.
///
/// Files are applied in order, so a key defined by a later file
/// overrides the same key from any earlier file.
pub fn merge_envs(envs: &[LoadedEnv]) -> MergedEnv {
	let mut merged = MergedEnv::default();

	for loaded in envs {
		for (key, value) in &loaded.vars {
			if let Some(previous) = merged.sources.get(key)
				&& previous != &loaded.path
			{
				tracing::debug!(
					"{} from {} overridden by {}",
					key,
					previous.display(),
					loaded.path.display()
				);
			}

			merged.vars.insert(key.clone(), value.clone());
			merged.sources.insert(key.clone(), loaded.path.clone());
		}
	}

	merged
}

/// Convenience function to load and merge env files in one step.
pub fn merge_env_files<P: AsRef<Path>>(paths: &[P]) -> Result<MergedEnv> {
	let envs = load_env_files(paths)?;
	Ok(merge_envs(&envs))
}
