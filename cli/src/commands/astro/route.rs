//! # qwikgen Astro Route Writer
//!
//! File: cli/src/commands/astro/route.rs
//!
//! ## Overview
//!
//! Writes an Astro page under `<pages_dir>` from the route template.
//!
//! The route name is normalized, one trailing `/` is dropped, and the last
//! segment becomes the file name. Every directory segment in front of it
//! deepens the template's relative imports by one level:
//!
//! ```text
//! qwikgen astro route "Blog/My Post"
//!   -> src/pages/blog/my-post.astro   (imports rewritten once)
//! ```
//!
use crate::common::fs::io;
use crate::common::ui::prompt::{self, Prompt, TerminalPrompt};
use crate::core::config::{self, LayoutConfig};
use crate::core::error::{ArtifactKind, QwikgenError, Result};
use crate::core::naming;
use crate::core::project::ProjectContext;
use crate::core::templating::{self, TemplateKind, TemplateResolver};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # Astro Route Arguments (`RouteArgs`)
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Route path, e.g. `blog/[slug]`. Asked for when omitted.
    name: Option<String>,
}

pub async fn handle_route(args: RouteArgs, workspace: Option<&Path>) -> Result<()> {
    info!("Handling astro route command...");
    let cfg = config::load_config().context("Failed to load qwikgen configuration")?;
    let project = ProjectContext::detect(workspace)?;
    project.require_qwik_astro()?;

    let resolver = TemplateResolver::from_config(&cfg);
    let mut terminal = TerminalPrompt::stdin();
    let created = write_route(&project, &cfg.layout, &resolver, args.name, &mut terminal)?;
    super::print_created(&created);
    Ok(())
}

/// Splits a normalized route into its directory segments and file name.
fn split_route(normalized: &str) -> (Vec<&str>, &str) {
    let route = normalized.strip_suffix('/').unwrap_or(normalized);
    let mut parts: Vec<&str> = route.split('/').collect();
    let file_name = parts.pop().unwrap_or_default();
    (parts, file_name)
}

/// Writes the route page and returns its path.
fn write_route(
    project: &ProjectContext,
    layout: &LayoutConfig,
    resolver: &TemplateResolver,
    name: Option<String>,
    prompt: &mut dyn Prompt,
) -> Result<PathBuf> {
    let raw = prompt::read_name(name, ArtifactKind::Route, prompt, &prompt::ROUTE_PROMPT)?;
    let normalized = naming::normalize(&raw);
    let (directories, file_name) = split_route(&normalized);
    if file_name.is_empty() {
        return Err(anyhow!(QwikgenError::EmptyInput {
            kind: ArtifactKind::Route
        }));
    }
    debug!(
        "Route '{}' -> directories {:?}, file '{}'",
        raw, directories, file_name
    );

    let template = resolver.resolve(TemplateKind::Route)?;
    let content = templating::nest_relative_imports(
        &templating::instantiate(&template, TemplateKind::Route, None, project.is_legacy_qwik()),
        directories.len(),
    );

    let mut route_dir = project.root.join(&layout.pages_dir);
    for directory in directories.iter().filter(|d| !d.is_empty()) {
        route_dir.push(directory);
    }
    let destination = route_dir.join(format!("{}.{}", file_name, TemplateKind::Route.output_extension()));
    io::write_new_file(&destination, &content, ArtifactKind::Route)?;
    Ok(destination)
}
