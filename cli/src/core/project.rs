//! # qwikgen Project Context
//!
//! File: cli/src/core/project.rs
//!
//! ## Overview
//!
//! This module inspects the workspace a command runs in and captures
//! everything the scaffolding commands need to know about it in a single
//! `ProjectContext` value:
//!
//! - the workspace root (the nearest directory holding a `package.json`),
//! - the parsed `package.json` manifest,
//! - the package manager, detected from its lockfile.
//!
//! The context is built once per command invocation and passed down, so the
//! manifest is read exactly once.
//!
//! ## Detection Rules
//!
//! | Question            | Answer taken from                                             |
//! |---------------------|---------------------------------------------------------------|
//! | Qwik City project?  | `devDependencies` has `@qwik.dev/router` or `@builder.io/qwik-city` |
//! | Qwik Astro project? | `dependencies` has both `@qwikdev/astro` and `astro`          |
//! | Legacy Qwik (v1)?   | `dependencies` has `@builder.io/qwik`                          |
//! | Package manager     | first lockfile found: npm, yarn, pnpm, bun                    |
//!
//! ## Usage
//!
//! ```rust
//! let project = ProjectContext::detect(args.workspace.as_deref())?;
//! project.require_qwik()?;
//! let pm = project.package_manager()?;
//! ```
//!
use crate::core::error::{QwikgenError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    collections::HashMap,
    fmt, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

const MANIFEST_FILENAME: &str = "package.json";

/// Package managers qwikgen can drive, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Detection order. The first lockfile found wins.
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    /// The executable name used to run package scripts.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Bun => "bun.lock",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// The parts of `package.json` qwikgen reads.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// Whether `name` is listed under `dependencies` with a non-empty version.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Whether `name` is listed under `devDependencies` with a non-empty version.
    pub fn has_dev_dependency(&self, name: &str) -> bool {
        self.dev_dependencies
            .get(name)
            .is_some_and(|v| !v.is_empty())
    }

    pub fn has_any_dependency(&self, name: &str) -> bool {
        self.has_dependency(name) || self.has_dev_dependency(name)
    }
}

/// Everything known about the workspace a command runs in.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub manifest: PackageManifest,
    pub package_manager: Option<PackageManager>,
}

impl ProjectContext {
    /// Builds the context for an explicit workspace directory, or for the
    /// nearest ancestor of the current directory that holds a `package.json`.
    pub fn detect(workspace: Option<&Path>) -> Result<Self> {
        let root = match workspace {
            Some(dir) if dir.is_dir() => dir.to_path_buf(),
            Some(dir) => {
                debug!("Workspace '{}' is not a directory.", dir.display());
                return Err(anyhow!(QwikgenError::WorkspaceNotFound));
            }
            None => {
                let current_dir =
                    std::env::current_dir().context("Failed to get current directory")?;
                find_workspace_root(&current_dir)
                    .ok_or_else(|| anyhow!(QwikgenError::WorkspaceNotFound))?
            }
        };
        Self::from_root(&root)
    }

    /// Reads the manifest and lockfiles under `root`.
    ///
    /// A missing `package.json` yields an empty manifest, which then fails the
    /// project-type checks; an unparsable one is an error.
    pub fn from_root(root: &Path) -> Result<Self> {
        let manifest_path = root.join(MANIFEST_FILENAME);
        let manifest = if manifest_path.is_file() {
            let content = fs::read_to_string(&manifest_path).with_context(|| {
                format!("Failed to read manifest {}", manifest_path.display())
            })?;
            serde_json::from_str(&content).map_err(|source| QwikgenError::Manifest {
                path: manifest_path.clone(),
                source,
            })?
        } else {
            debug!("No {} found in {}", MANIFEST_FILENAME, root.display());
            PackageManifest::default()
        };

        let package_manager = detect_package_manager(root);
        info!(
            "Workspace '{}' (package manager: {})",
            root.display(),
            package_manager.map_or("none", |pm| pm.command())
        );

        Ok(ProjectContext {
            root: root.to_path_buf(),
            manifest,
            package_manager,
        })
    }

    pub fn is_qwik(&self) -> bool {
        self.manifest.has_dev_dependency("@qwik.dev/router")
            || self.manifest.has_dev_dependency("@builder.io/qwik-city")
    }

    pub fn is_qwik_astro(&self) -> bool {
        self.manifest.has_dependency("@qwikdev/astro") && self.manifest.has_dependency("astro")
    }

    /// Projects still on the `@builder.io/qwik` package get their
    /// `@qwik.dev/core` imports rewritten.
    pub fn is_legacy_qwik(&self) -> bool {
        self.manifest.has_dependency("@builder.io/qwik")
    }

    pub fn require_qwik(&self) -> Result<()> {
        if !self.is_qwik() {
            return Err(anyhow!(QwikgenError::NotTargetProjectType {
                expected: "Qwik".to_string(),
            }));
        }
        Ok(())
    }

    /// Qwik Astro commands need both the integration and a package manager.
    pub fn require_qwik_astro(&self) -> Result<()> {
        if !self.is_qwik_astro() {
            return Err(anyhow!(QwikgenError::NotTargetProjectType {
                expected: "Qwik Astro".to_string(),
            }));
        }
        self.package_manager().map(|_| ())
    }

    pub fn package_manager(&self) -> Result<PackageManager> {
        self.package_manager.ok_or_else(|| {
            let searched = PackageManager::ALL
                .iter()
                .map(|pm| pm.lockfile())
                .collect::<Vec<_>>()
                .join(",");
            anyhow!(QwikgenError::PackageManagerNotFound { searched })
        })
    }
}

/// Returns the first package manager whose lockfile exists in `root`.
pub fn detect_package_manager(root: &Path) -> Option<PackageManager> {
    PackageManager::ALL
        .into_iter()
        .find(|pm| root.join(pm.lockfile()).exists())
}

fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILENAME).is_file())
        .map(Path::to_path_buf)
}
