//! # qwikgen CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `qwikgen` binary inside a throwaway workspace, with the user
//! configuration directory redirected into the same tempdir so the host's
//! own qwikgen settings never leak in.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Templates shipped with the repository.
pub const REPO_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../templates");

/// `package.json` of a Qwik City project.
pub const QWIK_CITY_MANIFEST: &str = r#"{
  "name": "city",
  "devDependencies": {
    "@qwik.dev/core": "2.0.0",
    "@qwik.dev/router": "2.0.0"
  }
}"#;

/// `package.json` of a Qwik Astro project.
pub const QWIK_ASTRO_MANIFEST: &str = r#"{
  "name": "site",
  "dependencies": {
    "@qwikdev/astro": "^0.7.0",
    "astro": "^5.0.0",
    "@qwik.dev/core": "2.0.0"
  }
}"#;

pub fn qwikgen_cmd() -> Command {
    Command::cargo_bin("qwikgen").expect("Failed to find qwikgen binary for testing")
}

/// A temporary workspace with its own home directory.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Creates a workspace with the given `package.json` and optional lockfile.
    pub fn new(manifest: &str, lockfile: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let ws = TestWorkspace { dir };
        fs::create_dir_all(ws.root()).expect("Failed to create project dir");
        fs::create_dir_all(ws.home()).expect("Failed to create home dir");
        ws.write("package.json", manifest);
        if let Some(lockfile) = lockfile {
            ws.write(lockfile, "");
        }
        ws
    }

    /// Project root.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write workspace file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).expect("Failed to read workspace file")
    }

    /// `qwikgen` running in `cwd` with an isolated environment.
    pub fn cmd_in(&self, cwd: &Path) -> Command {
        let mut cmd = qwikgen_cmd();
        cmd.current_dir(cwd)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("QWIKGEN_TEMPLATES_DIR", REPO_TEMPLATES)
            .env_remove("QWIKGEN_WORKSPACE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `qwikgen` running in the project root.
    pub fn cmd(&self) -> Command {
        self.cmd_in(&self.root())
    }
}
