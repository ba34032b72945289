//! Env file handling for envmerge.
//!
//! This module handles:
//! - `KEY=VALUE` file parsing
//! - Merging parsed files in precedence order
//! - Serializing the merged result

pub mod merge;
pub mod parser;
pub mod types;
pub mod writer;

pub use merge::{load_env_files, merge_env_files, merge_envs};
pub use parser::{parse_env_file, parse_env_str};
pub use types::{EnvMap, LoadedEnv, MergedEnv};
pub use writer::{render_env, write_env_file};
