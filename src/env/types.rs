use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key/value pairs parsed from one or more env files.
pub type EnvMap = HashMap<String, String>;

/// A parsed env file with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedEnv {
	/// The parsed variables.
	pub vars: EnvMap,

	/// The path these variables were loaded from.
	pub path: PathBuf,
}

/// Merged variables from multiple env files, in precedence order.
#[derive(Debug, Clone, Default)]
pub struct MergedEnv {
	/// Final variables after later files overrode earlier ones.
	pub vars: EnvMap,

	/// For each key in `vars`, the file that supplied its value.
	pub sources: HashMap<String, PathBuf>,
}

impl MergedEnv {
	/// The file that supplied the winning value for `key`, if any.
	pub fn source_of(&self, key: &str) -> Option<&Path> {
		self.sources.get(key).map(PathBuf::as_path)
	}

	/// Number of merged variables.
	pub fn len(&self) -> usize {
		self.vars.len()
	}

	/// True when no file defined any variable.
	pub fn is_empty(&self) -> bool {
		self.vars.is_empty()
	}
}
