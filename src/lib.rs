//! Envmerge - CLI tool for merging env files.
//!
//! This library provides the core functionality for envmerge, including:
//! - Line-oriented `KEY=VALUE` parsing with comment and blank line skipping
//! - Left-to-right merging where later files override earlier ones
//! - Writing the merged result back out as an env file
//!
//! # Example
//!
//! ```no_run
//! use envmerge::env::{merge_env_files, write_env_file};
//! use std::path::Path;
//!
//! let merged = merge_env_files(&[".env", ".env.local"]).unwrap();
//!
//! if let Some(source) = merged.source_of("DATABASE_URL") {
//!     println!("DATABASE_URL comes from: {}", source.display());
//! }
//!
//! write_env_file(Path::new("merged.env"), &merged.vars, true).unwrap();
//! ```

pub mod env;
pub mod error;

pub use error::{EnvMergeError, Result};
