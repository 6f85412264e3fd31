//! # qwikgen CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behaviour of the `qwikgen` binary: `--help`, `--version`, the
//! `help` subcommand, and workspace selection.
//!

mod common;
use common::{qwikgen_cmd, TestWorkspace, QWIK_CITY_MANIFEST};
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    qwikgen_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_commands() {
    qwikgen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("component"))
        .stdout(predicate::str::contains("astro"))
        .stdout(predicate::str::contains("docs"));
}

#[test]
fn test_help_subcommand() {
    qwikgen_cmd()
        .args(["help", "astro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: qwikgen astro"));
}

#[test]
fn test_missing_subcommand_fails() {
    qwikgen_cmd().assert().failure();
}

#[test]
fn test_workspace_flag_selects_project() {
    let ws = TestWorkspace::new(QWIK_CITY_MANIFEST, Some("pnpm-lock.yaml"));
    let elsewhere = ws.home();
    ws.cmd_in(&elsewhere)
        .args(["--workspace"])
        .arg(ws.root())
        .args(["route", "about", "--print"])
        .assert()
        .success()
        .stdout("pnpm run qwik new /about\n");
}

#[test]
fn test_workspace_env_selects_project() {
    let ws = TestWorkspace::new(QWIK_CITY_MANIFEST, Some("yarn.lock"));
    let elsewhere = ws.home();
    ws.cmd_in(&elsewhere)
        .env("QWIKGEN_WORKSPACE", ws.root())
        .args(["component", "card", "--print"])
        .assert()
        .success()
        .stdout("yarn run qwik new card\n");
}

#[test]
fn test_missing_workspace_directory() {
    let ws = TestWorkspace::new(QWIK_CITY_MANIFEST, Some("package-lock.json"));
    ws.cmd()
        .args(["--workspace", "does/not/exist", "route", "about", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Workspace not found."));
}

#[test]
fn test_no_package_json_anywhere() {
    let ws = TestWorkspace::new(QWIK_CITY_MANIFEST, None);
    ws.cmd_in(&ws.home())
        .args(["route", "about", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Workspace not found."));
}
