//! # qwikgen UI Command
//!
//! File: cli/src/commands/ui.rs
//!
//! ## Overview
//!
//! Prints the Qwik UI documentation entry point that fits the workspace:
//! the styled introduction when `@qwik-ui/styled` is installed, the headless
//! introduction when only `@qwik-ui/headless` is, and the Qwik UI home page
//! otherwise. Both `dependencies` and `devDependencies` are checked.
//!
use crate::core::error::Result;
use crate::core::project::{PackageManifest, ProjectContext};
use clap::Parser;
use std::path::Path;
use tracing::debug;

const QWIK_UI_HOME: &str = "https://qwikui.com/";
const HEADLESS_INTRO: &str = "https://qwikui.com/docs/headless/introduction/";
const STYLED_INTRO: &str = "https://qwikui.com/docs/styled/introduction/";

/// # UI Arguments (`UiArgs`)
#[derive(Parser, Debug)]
pub struct UiArgs {}

pub async fn handle_ui(_args: UiArgs, workspace: Option<&Path>) -> Result<()> {
    let project = ProjectContext::detect(workspace)?;
    let url = qwik_ui_url(&project.manifest);
    debug!("Qwik UI entry point for {}: {}", project.root.display(), url);
    println!("{}", url);
    Ok(())
}

pub fn qwik_ui_url(manifest: &PackageManifest) -> &'static str {
    if manifest.has_any_dependency("@qwik-ui/styled") {
        STYLED_INTRO
    } else if manifest.has_any_dependency("@qwik-ui/headless") {
        HEADLESS_INTRO
    } else {
        QWIK_UI_HOME
    }
}
