//! # qwikgen: Qwik Scaffolding CLI
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This is the main entry point for the `qwikgen` command-line tool. It
//! scaffolds routes and components for Qwik projects:
//!
//! - **Qwik City projects**: routes and components are created by the
//!   project's own generator (`<pm> run qwik new ...`).
//! - **Qwik Astro projects**: component and page files are written directly
//!   from templates.
//! - **Lookups**: documentation URLs for Qwik symbols and the Qwik UI
//!   entry point for the workspace.
//!
//! ## Architecture
//!
//! The application is organized into these main modules:
//! - `commands`: One module per subcommand (`route`, `component`, `astro`, `docs`, `ui`)
//! - `common`: Shared utilities (filesystem writes, process execution, prompts)
//! - `core`: Naming rules, templates, project detection, configuration, errors
//!
//! ## Usage
//!
//! ```bash
//! qwikgen route "product/[id]"
//! qwikgen component "My Button" --print
//! qwikgen astro component counter --flavor jsx
//! qwikgen astro route blog/first-post
//! qwikgen docs 'useSignal(0);'
//! qwikgen -vv --workspace ./site ui
//! ```
//!
//! Verbosity: `-v` info, `-vv` debug, `-vvv` trace. `RUST_LOG` takes
//! precedence when set. Logs go to stderr.
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;

/// # qwikgen CLI Structure (`Cli`)
#[derive(Parser, Debug)]
#[command(
    name = "qwikgen",
    about = "⚡ qwikgen: scaffold routes and components for Qwik projects",
    long_about = "Create routes and components in Qwik City and Qwik Astro projects,\n\
                  and look up Qwik documentation.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Workspace root. Defaults to the nearest directory with a package.json.
    #[arg(long, global = true, env = "QWIKGEN_WORKSPACE", value_name = "DIR")]
    workspace: Option<PathBuf>,
}

/// # Top-Level Commands (`Commands`)
#[derive(Parser, Debug)]
enum Commands {
    /// Add a route to a Qwik City project.
    #[command(alias = "r")]
    Route(commands::route::RouteArgs),
    /// Add a component to a Qwik City project.
    #[command(alias = "c")]
    Component(commands::component::ComponentArgs),
    /// Write components and pages into a Qwik Astro project.
    #[command(alias = "a")]
    Astro(commands::astro::AstroArgs),
    /// Print the Qwik documentation URL for a symbol.
    Docs(commands::docs::DocsArgs),
    /// Print the Qwik UI documentation URL for the workspace.
    Ui(commands::ui::UiArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let workspace = cli.workspace.as_deref();
    let command_result = match cli.command {
        Commands::Route(args) => commands::route::handle_route(args, workspace).await,
        Commands::Component(args) => commands::component::handle_component(args, workspace).await,
        Commands::Astro(args) => commands::astro::handle_astro(args, workspace).await,
        Commands::Docs(args) => commands::docs::handle_docs(args).await,
        Commands::Ui(args) => commands::ui::handle_ui(args, workspace).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
