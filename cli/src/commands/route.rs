//! # qwikgen Route Command
//!
//! File: cli/src/commands/route.rs
//!
//! ## Overview
//!
//! This module implements `qwikgen route`, which adds a route to a Qwik City
//! project by running the project's generator:
//!
//! ```bash
//! qwikgen route "product/[id]"            # pnpm run qwik new /product/[id]
//! qwikgen route "(admin)/profile"         # pnpm run qwik new /"(admin)"/profile
//! qwikgen route blog/welcome --flavor mdx # pnpm run qwik new /blog/welcome.mdx
//! qwikgen route about --print             # only print the command
//! ```
//!
//! ## Flow
//!
//! 1. Load configuration and detect the project (`ProjectContext`)
//! 2. Require a Qwik City project and a package manager
//! 3. Take the route name from the command line or ask for it
//! 4. Normalize the name and build `<pm> run <script> new /<route><suffix>`
//! 5. Run it in the workspace root, or print it with `--print`
//!
use crate::common::process;
use crate::common::ui::prompt::{self, Prompt, TerminalPrompt};
use crate::core::config;
use crate::core::error::{ArtifactKind, Result};
use crate::core::naming;
use crate::core::project::{PackageManager, ProjectContext};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::Path;
use tracing::{debug, info};

/// # Route Arguments (`RouteArgs`)
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Route path, e.g. `product/[id]` or `(admin)/profile`. Asked for when omitted.
    name: Option<String>,

    /// File flavour of the generated route.
    #[arg(long, short = 'f', value_enum, default_value_t = RouteFlavor::Tsx)]
    flavor: RouteFlavor,

    /// Print the generator command instead of running it.
    #[arg(long, short = 'p')]
    print: bool,
}

/// Route file flavours understood by the Qwik City generator.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFlavor {
    /// `index.tsx` route (the generator's default, no suffix).
    Tsx,
    /// Markdown route.
    Md,
    /// MDX route.
    Mdx,
}

impl RouteFlavor {
    /// Suffix appended to the generator argument.
    pub fn suffix(&self) -> &'static str {
        match self {
            RouteFlavor::Tsx => "",
            RouteFlavor::Md => ".md",
            RouteFlavor::Mdx => ".mdx",
        }
    }
}

/// # Handle Route Command (`handle_route`)
pub async fn handle_route(args: RouteArgs, workspace: Option<&Path>) -> Result<()> {
    info!("Handling route command...");
    let cfg = config::load_config().context("Failed to load qwikgen configuration")?;
    let project = ProjectContext::detect(workspace)?;
    project.require_qwik()?;
    let package_manager = project.package_manager()?;

    let mut terminal = TerminalPrompt::stdin();
    let command_line = build_route_command(
        args.name,
        args.flavor,
        package_manager,
        &cfg.generator.script,
        &mut terminal,
    )?;

    if args.print {
        println!("{}", command_line);
        return Ok(());
    }
    process::run_in_shell(&command_line, &project.root).await
}

/// Reads and normalizes the route name, then builds the generator command line.
fn build_route_command(
    name: Option<String>,
    flavor: RouteFlavor,
    package_manager: PackageManager,
    script: &str,
    prompt: &mut dyn Prompt,
) -> Result<String> {
    let raw = prompt::read_name(name, ArtifactKind::Route, prompt, &prompt::ROUTE_PROMPT)?;
    let normalized = naming::normalize(&raw);
    debug!("Normalized route '{}' to '{}'", raw, normalized);

    let target = format!("/{}{}", normalized, flavor.suffix());
    Ok(process::generator_command_line(package_manager, script, &target))
}
