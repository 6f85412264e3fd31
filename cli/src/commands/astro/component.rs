//! # qwikgen Astro Component Writer
//!
//! File: cli/src/commands/astro/component.rs
//!
//! ## Overview
//!
//! Writes `<components_dir>/<name>/<name>.<tsx|jsx>` from the matching
//! component template. The name is only trimmed, not normalized; the
//! component identifier inside the file is its PascalCase form.
//!
//! ```bash
//! qwikgen astro component counter            # src/components/qwik/counter/counter.tsx
//! qwikgen astro component counter --flavor jsx
//! ```
//!
use crate::common::fs::io;
use crate::common::ui::prompt::{self, Prompt, TerminalPrompt};
use crate::core::config::{self, LayoutConfig};
use crate::core::error::{ArtifactKind, QwikgenError, Result};
use crate::core::project::ProjectContext;
use crate::core::templating::{self, TemplateKind, TemplateResolver};
use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # Astro Component Arguments (`ComponentArgs`)
#[derive(Parser, Debug)]
pub struct ComponentArgs {
    /// Component name, e.g. `my-component`. Asked for when omitted.
    name: Option<String>,

    /// Source flavour of the component file.
    #[arg(long, short = 'f', value_enum, default_value_t = ComponentFlavor::Tsx)]
    flavor: ComponentFlavor,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentFlavor {
    Tsx,
    Jsx,
}

impl From<ComponentFlavor> for TemplateKind {
    fn from(flavor: ComponentFlavor) -> Self {
        match flavor {
            ComponentFlavor::Tsx => TemplateKind::Tsx,
            ComponentFlavor::Jsx => TemplateKind::Jsx,
        }
    }
}

pub async fn handle_component(args: ComponentArgs, workspace: Option<&Path>) -> Result<()> {
    info!("Handling astro component command...");
    let cfg = config::load_config().context("Failed to load qwikgen configuration")?;
    let project = ProjectContext::detect(workspace)?;
    project.require_qwik_astro()?;

    let resolver = TemplateResolver::from_config(&cfg);
    let mut terminal = TerminalPrompt::stdin();
    let created = write_component(
        &project,
        &cfg.layout,
        &resolver,
        args.name,
        args.flavor.into(),
        &mut terminal,
    )?;
    super::print_created(&created);
    Ok(())
}

/// Writes the component file and returns its path.
fn write_component(
    project: &ProjectContext,
    layout: &LayoutConfig,
    resolver: &TemplateResolver,
    name: Option<String>,
    kind: TemplateKind,
    prompt: &mut dyn Prompt,
) -> Result<PathBuf> {
    let raw = prompt::read_name(
        name,
        ArtifactKind::Component,
        prompt,
        &prompt::COMPONENT_PROMPT,
    )?;
    let name = raw.trim();

    let destination = project
        .root
        .join(&layout.components_dir)
        .join(name)
        .join(format!("{}.{}", name, kind.output_extension()));
    if destination.exists() {
        return Err(anyhow!(QwikgenError::DestinationAlreadyExists {
            kind: ArtifactKind::Component,
            path: destination,
        }));
    }

    let template = resolver.resolve(kind)?;
    let content = templating::instantiate(&template, kind, Some(name), project.is_legacy_qwik());
    debug!("Writing {} component to {}", kind, destination.display());
    io::write_new_file(&destination, &content, ArtifactKind::Component)?;
    Ok(destination)
}
