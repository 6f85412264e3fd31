//! # qwikgen Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout qwikgen. Every failure
//! a command can hit (bad input, missing template, existing destination,
//! wrong project type, ...) has a dedicated `QwikgenError` variant so the
//! message shown to the user is consistent across commands.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `QwikgenError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - Input validation (empty names, forbidden characters, cancelled prompts)
//! - Template lookup and file generation
//! - Project detection (workspace, package manager, framework)
//! - Configuration, manifests and external commands
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error kind
//! if destination.exists() {
//!     anyhow::bail!(QwikgenError::DestinationAlreadyExists {
//!         kind: ArtifactKind::Component,
//!         path: destination.to_path_buf(),
//!     });
//! }
//!
//! // Check for a specific kind further up the stack
//! if let Some(QwikgenError::TemplateNotFound { name }) = err.downcast_ref::<QwikgenError>() {
//!     eprintln!("missing template {}", name);
//! }
//! ```
//!
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two things qwikgen can scaffold. Used to phrase validation and
/// collision messages ("Route name cannot be empty", "Component already exists").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Route,
    Component,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Route => write!(f, "Route"),
            ArtifactKind::Component => write!(f, "Component"),
        }
    }
}

/// Custom error type for the qwikgen application.
#[derive(Error, Debug)]
pub enum QwikgenError {
    #[error("{kind} name cannot be empty")]
    EmptyInput { kind: ArtifactKind },

    #[error("No {kind} Details Entered.")]
    NoInput { kind: ArtifactKind },

    #[error("{kind} name cannot contain '{character}'")]
    InvalidCharacter { kind: ArtifactKind, character: char },

    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },

    #[error("{kind} Already Exists: {}", path.display())]
    DestinationAlreadyExists { kind: ArtifactKind, path: PathBuf },

    #[error("Workspace not found.")]
    WorkspaceNotFound,

    #[error("Package manager was not found, {searched}")]
    PackageManagerNotFound { searched: String },

    #[error("Not a {expected} Project")]
    NotTargetProjectType { expected: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Failed to parse manifest '{}': {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let empty = QwikgenError::EmptyInput {
            kind: ArtifactKind::Route,
        };
        assert_eq!(empty.to_string(), "Route name cannot be empty");

        let slash = QwikgenError::InvalidCharacter {
            kind: ArtifactKind::Component,
            character: '/',
        };
        assert_eq!(slash.to_string(), "Component name cannot contain '/'");

        let cancelled = QwikgenError::NoInput {
            kind: ArtifactKind::Component,
        };
        assert_eq!(cancelled.to_string(), "No Component Details Entered.");

        let not_qwik = QwikgenError::NotTargetProjectType {
            expected: "Qwik Astro".into(),
        };
        assert_eq!(not_qwik.to_string(), "Not a Qwik Astro Project");
    }

    #[test]
    fn test_destination_exists_mentions_path() {
        let err = QwikgenError::DestinationAlreadyExists {
            kind: ArtifactKind::Route,
            path: PathBuf::from("src/pages/blog/post.astro"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Route Already Exists"));
        assert!(msg.contains("src/pages/blog/post.astro"));
    }
}
