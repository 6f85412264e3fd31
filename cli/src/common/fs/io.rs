//! # qwikgen Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations the
//! scaffolding commands need. It provides small wrappers around `std::fs`
//! that add context to errors and enforce the "never overwrite" rule for
//! generated files.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and its parents) when
//!   missing, and fails if the path exists but is not a directory.
//! - **`read_file_to_string`**: `fs::read_to_string` with the file name in the
//!   error message.
//! - **`write_new_file`**: Writes a generated file. It refuses to touch an
//!   existing destination (`QwikgenError::DestinationAlreadyExists`), creates
//!   the parent directories, then creates the file with `create_new` so a
//!   file appearing in between is not clobbered either.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::write_new_file(Path::new("src/pages/blog/post.astro"), &content, ArtifactKind::Route)?;
//! ```
//!
use crate::core::error::{ArtifactKind, QwikgenError, Result};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory, including
/// any necessary parent directories (similar to `mkdir -p`). If the path
/// already exists but is not a directory, a `QwikgenError::FileSystem` error
/// is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(QwikgenError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes a generated file, failing if the destination already exists.
///
/// `kind` only shapes the error message ("Route Already Exists: ...").
/// Parent directories are created as needed; a directory created before a
/// failed write is left in place.
///
/// # Errors
///
/// - `QwikgenError::DestinationAlreadyExists` if `path` is already present.
/// - Directory creation or write failures, with context.
pub fn write_new_file(path: &Path, content: &str, kind: ArtifactKind) -> Result<()> {
    if path.exists() {
        anyhow::bail!(QwikgenError::DestinationAlreadyExists {
            kind,
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!(QwikgenError::DestinationAlreadyExists {
                kind,
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create file {:?}", path));
        }
    };
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_write_new_file_creates_parents() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("src/components/qwik/card/card.tsx");
        write_new_file(&file_path, "export const Card = 1;", ArtifactKind::Component)?;
        assert_eq!(read_file_to_string(&file_path)?, "export const Card = 1;");
        Ok(())
    }

    #[test]
    fn test_write_new_file_refuses_existing() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("post.astro");
        fs::write(&file_path, "original")?;

        let err = write_new_file(&file_path, "replacement", ArtifactKind::Route).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QwikgenError>(),
            Some(QwikgenError::DestinationAlreadyExists {
                kind: ArtifactKind::Route,
                ..
            })
        ));
        // No write happened.
        assert_eq!(fs::read_to_string(&file_path)?, "original");
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.txt"));
        assert!(result.is_err());
        Ok(())
    }
}
