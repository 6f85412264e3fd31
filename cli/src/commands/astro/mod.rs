//! # qwikgen Astro Command Group
//!
//! File: cli/src/commands/astro/mod.rs
//!
//! ## Overview
//!
//! Qwik Astro projects (`@qwikdev/astro` + `astro`) have no generator script,
//! so qwikgen writes the files itself from templates:
//!
//! - `qwikgen astro component <name>`: `src/components/qwik/<name>/<name>.tsx`
//!   (or `.jsx` with `--flavor jsx`)
//! - `qwikgen astro route <path>`: `src/pages/<path>.astro`
//!
//! Both refuse to overwrite an existing file.
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::env;
use std::path::Path;

mod component;
mod route;

/// # Astro Command Group Arguments (`AstroArgs`)
#[derive(Parser, Debug)]
pub struct AstroArgs {
    #[command(subcommand)]
    command: AstroCommand,
}

#[derive(Subcommand, Debug)]
enum AstroCommand {
    /// Write a Qwik component into a Qwik Astro project.
    #[command(alias = "c")]
    Component(component::ComponentArgs),
    /// Write an Astro page into a Qwik Astro project.
    #[command(alias = "r")]
    Route(route::RouteArgs),
}

/// # Handle Astro Command (`handle_astro`)
///
/// Dispatches to the selected subcommand.
pub async fn handle_astro(args: AstroArgs, workspace: Option<&Path>) -> Result<()> {
    match args.command {
        AstroCommand::Component(args) => component::handle_component(args, workspace).await?,
        AstroCommand::Route(args) => route::handle_route(args, workspace).await?,
    }
    Ok(())
}

/// Prints the created file, relative to the current directory when possible.
fn print_created(path: &Path) {
    let display_path = match env::current_dir() {
        Ok(cwd) => pathdiff::diff_paths(path, &cwd)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        Err(_) => path.display().to_string(),
    };
    println!("✅ Created {}", display_path);
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_astro_component() {
        let args = AstroArgs::try_parse_from(["astro", "component", "card", "--flavor", "jsx"]).unwrap();
        assert!(matches!(args.command, AstroCommand::Component(_)));
    }

    #[test]
    fn test_parses_astro_route_alias() {
        let args = AstroArgs::try_parse_from(["astro", "r", "blog/post"]).unwrap();
        assert!(matches!(args.command, AstroCommand::Route(_)));
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(AstroArgs::try_parse_from(["astro"]).is_err());
    }
}
