//! # qwikgen Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for the filesystem helpers used by the scaffolding commands.
//! Everything currently lives in the `io` submodule:
//!
//! - **`io`**: ensuring directories exist, reading files to strings, and
//!   writing generated files without ever overwriting an existing one.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let template = io::read_file_to_string(&template_path)?;
//! io::write_new_file(&destination, &content, ArtifactKind::Component)?;
//! ```
//!

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `write_new_file`).
pub mod io;
