//! # qwikgen Lookup Integration Tests
//!
//! File: cli/tests/lookup.rs
//!
//! ## Overview
//!
//! `qwikgen docs` and `qwikgen ui` only print URLs.
//!

mod common;
use common::{qwikgen_cmd, TestWorkspace, QWIK_CITY_MANIFEST};

#[test]
fn test_docs_known_symbol() {
    qwikgen_cmd()
        .args(["docs", "useSignal(0);"])
        .assert()
        .success()
        .stdout("https://qwik.dev/docs/components/state/#usesignal\n");
}

#[test]
fn test_docs_component_symbol() {
    qwikgen_cmd()
        .args(["docs", "component$"])
        .assert()
        .success()
        .stdout("https://qwik.dev/docs/components/overview/#component\n");
}

#[test]
fn test_docs_falls_back_to_root() {
    qwikgen_cmd()
        .args(["docs", "const count = useSignal(0);"])
        .assert()
        .success()
        .stdout("https://qwik.dev/docs/\n");
    qwikgen_cmd()
        .arg("docs")
        .assert()
        .success()
        .stdout("https://qwik.dev/docs/\n");
}

#[test]
fn test_ui_default() {
    let ws = TestWorkspace::new(QWIK_CITY_MANIFEST, None);
    ws.cmd()
        .arg("ui")
        .assert()
        .success()
        .stdout("https://qwikui.com/\n");
}

#[test]
fn test_ui_styled() {
    let ws = TestWorkspace::new(
        r#"{ "devDependencies": { "@qwik-ui/headless": "^0.6.0", "@qwik-ui/styled": "^0.3.0" } }"#,
        None,
    );
    ws.cmd()
        .arg("ui")
        .assert()
        .success()
        .stdout("https://qwikui.com/docs/styled/introduction/\n");
}

#[test]
fn test_ui_headless() {
    let ws = TestWorkspace::new(
        r#"{ "dependencies": { "@qwik-ui/headless": "^0.6.0" } }"#,
        None,
    );
    ws.cmd()
        .arg("ui")
        .assert()
        .success()
        .stdout("https://qwikui.com/docs/headless/introduction/\n");
}
