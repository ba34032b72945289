use crate::env::types::EnvMap;
use crate::error::{EnvMergeError, Result};
use std::path::Path;

/// Parse an env file from the given path.
///
/// Invalid UTF-8 bytes are replaced with U+FFFD rather than rejected.
pub fn parse_env_file(path: &Path) -> Result<EnvMap> {
	let bytes = std::fs::read(path).map_err(|source| EnvMergeError::ReadError {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!("Parsing env file {}", path.display());
	Ok(parse_env_str(&String::from_utf8_lossy(&bytes)))
}

/// Parse env content from a string (useful for testing).
///
/// Each line is trimmed. Blank lines and lines starting with `#` are skipped,
/// the rest are split on the first `=` into a trimmed key and value. Lines
/// without `=` are ignored. A repeated key keeps its last value.
pub fn parse_env_str(content: &str) -> EnvMap {
	let mut vars = EnvMap::new();

	for (index, raw_line) in content.lines().enumerate() {
		let line = raw_line.trim();

		if line.is_empty() || line.starts_with('#') {
			continue;
		}

		let Some((key, value)) = line.split_once('=') else {
			tracing::debug!("Ignoring line {} without '='", index + 1);
			continue;
		};

		vars.insert(key.trim().to_string(), value.trim().to_string());
	}

	vars
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_empty_content() {
		assert!(parse_env_str("").is_empty());
	}

	#[test]
	fn test_parse_basic_pairs() {
		let vars = parse_env_str("FOO=1\nBAR=2\n");

		assert_eq!(vars.len(), 2);
		assert_eq!(vars.get("FOO"), Some(&"1".to_string()));
		assert_eq!(vars.get("BAR"), Some(&"2".to_string()));
	}

	#[test]
	fn test_comments_and_blank_lines_produce_nothing() {
		let content = r#"
# leading comment

   # indented comment

#KEY=value
"#;
		assert!(parse_env_str(content).is_empty());
	}

	#[test]
	fn test_line_without_equals_is_ignored() {
		let vars = parse_env_str("export\nFOO=1\njust some text\n");

		assert_eq!(vars.len(), 1);
		assert_eq!(vars.get("FOO"), Some(&"1".to_string()));
	}

	#[test]
	fn test_key_and_value_are_trimmed() {
		let vars = parse_env_str("   FOO   =   hello world   \n");

		assert_eq!(vars.get("FOO"), Some(&"hello world".to_string()));
	}

	#[test]
	fn test_split_on_first_equals_only() {
		let vars = parse_env_str("URL=postgres://host/db?opt=a=b");

		assert_eq!(
			vars.get("URL"),
			Some(&"postgres://host/db?opt=a=b".to_string())
		);
	}

	#[test]
	fn test_empty_value_and_empty_key() {
		let vars = parse_env_str("EMPTY=\n=orphan\n");

		assert_eq!(vars.get("EMPTY"), Some(&String::new()));
		assert_eq!(vars.get(""), Some(&"orphan".to_string()));
	}

	#[test]
	fn test_duplicate_key_last_occurrence_wins() {
		let vars = parse_env_str("FOO=first\nFOO=second\n");

		assert_eq!(vars.len(), 1);
		assert_eq!(vars.get("FOO"), Some(&"second".to_string()));
	}

	#[test]
	fn test_crlf_line_endings() {
		let vars = parse_env_str("FOO=1\r\nBAR=2\r\n");

		assert_eq!(vars.get("FOO"), Some(&"1".to_string()));
		assert_eq!(vars.get("BAR"), Some(&"2".to_string()));
	}

	#[test]
	fn test_parse_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("missing.env");

		match parse_env_file(&path) {
			Err(EnvMergeError::ReadError { path: err_path, .. }) => {
				assert_eq!(err_path, path);
			}
			other => panic!("Expected ReadError, got {:?}", other),
		}
	}

	#[test]
	fn test_parse_file_with_latin1_bytes() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".env");
		std::fs::write(&path, b"# caf\xe9 settings\nFOO=1\nNAME=caf\xe9\n").unwrap();

		let vars = parse_env_file(&path).unwrap();

		assert_eq!(vars.len(), 2);
		assert_eq!(vars.get("FOO"), Some(&"1".to_string()));
		assert_eq!(vars.get("NAME"), Some(&"caf\u{FFFD}".to_string()));
	}

	#[test]
	fn test_parse_file_from_disk() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".env");
		std::fs::write(&path, "# app settings\nPORT=8080\n\nHOST = localhost\n").unwrap();

		let vars = parse_env_file(&path).unwrap();

		assert_eq!(vars.len(), 2);
		assert_eq!(vars.get("PORT"), Some(&"8080".to_string()));
		assert_eq!(vars.get("HOST"), Some(&"localhost".to_string()));
	}
}
