//! # qwikgen Component Command
//!
//! File: cli/src/commands/component.rs
//!
//! ## Overview
//!
//! This module implements `qwikgen component`, which adds a component to a
//! Qwik City project through the project's generator:
//!
//! ```bash
//! qwikgen component "My Button"   # npm run qwik new my-button
//! qwikgen component card --print  # only print the command
//! ```
//!
//! Component names are a single path segment; a `/` is rejected before
//! anything runs.
//!
use crate::common::process;
use crate::common::ui::prompt::{self, Prompt, TerminalPrompt};
use crate::core::config;
use crate::core::error::{ArtifactKind, Result};
use crate::core::naming;
use crate::core::project::{PackageManager, ProjectContext};
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

/// # Component Arguments (`ComponentArgs`)
#[derive(Parser, Debug)]
pub struct ComponentArgs {
    /// Component name, e.g. `my-component`. Asked for when omitted.
    name: Option<String>,

    /// Print the generator command instead of running it.
    #[arg(long, short = 'p')]
    print: bool,
}

/// # Handle Component Command (`handle_component`)
pub async fn handle_component(args: ComponentArgs, workspace: Option<&Path>) -> Result<()> {
    info!("Handling component command...");
    let cfg = config::load_config().context("Failed to load qwikgen configuration")?;
    let project = ProjectContext::detect(workspace)?;
    project.require_qwik()?;
    let package_manager = project.package_manager()?;

    let mut terminal = TerminalPrompt::stdin();
    let command_line =
        build_component_command(args.name, package_manager, &cfg.generator.script, &mut terminal)?;

    if args.print {
        println!("{}", command_line);
        return Ok(());
    }
    process::run_in_shell(&command_line, &project.root).await
}

fn build_component_command(
    name: Option<String>,
    package_manager: PackageManager,
    script: &str,
    prompt: &mut dyn Prompt,
) -> Result<String> {
    let raw = prompt::read_name(
        name,
        ArtifactKind::Component,
        prompt,
        &prompt::COMPONENT_PROMPT,
    )?;
    let normalized = naming::normalize(&raw);
    debug!("Normalized component '{}' to '{}'", raw, normalized);
    Ok(process::generator_command_line(package_manager, script, &normalized))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::prompt::ScriptedPrompt;
    use crate::core::error::QwikgenError;

    #[test]
    fn test_build_component_command() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let line = build_component_command(
            Some("My Component".into()),
            PackageManager::Pnpm,
            "qwik",
            &mut prompt,
        )
        .unwrap();
        assert_eq!(line, "pnpm run qwik new my-component");
    }

    #[test]
    fn test_build_component_command_rejects_slash() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let err = build_component_command(
            Some("forms/input".into()),
            PackageManager::Npm,
            "qwik",
            &mut prompt,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QwikgenError>(),
            Some(QwikgenError::InvalidCharacter { character: '/', .. })
        ));
    }

    #[test]
    fn test_build_component_command_prompt_retries() {
        let mut prompt = ScriptedPrompt::new(&["a/b", "Card"]);
        let line =
            build_component_command(None, PackageManager::Npm, "qwik", &mut prompt).unwrap();
        assert_eq!(line, "npm run qwik new card");
        assert_eq!(prompt.rejections, vec!["Component name cannot contain '/'"]);
    }
}
