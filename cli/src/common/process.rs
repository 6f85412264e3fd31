//! # qwikgen Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Route and component generation for Qwik City projects is delegated to the
//! project's own generator script, run through its package manager:
//!
//! ```text
//! pnpm run qwik new /"(admin)"/profile
//! npm run qwik new my-component
//! ```
//!
//! This module builds that command line and runs it through the platform
//! shell (`sh -c` on Unix, `cmd /C` on Windows) in the workspace root. The
//! shell is used on purpose: normalized names carry shell quoting for route
//! groups, and that quoting has to be interpreted by a shell.
//!
//! The child inherits stdin/stdout/stderr so the generator's own prompts and
//! output reach the user directly.
//!
use crate::core::error::{QwikgenError, Result};
use crate::core::project::PackageManager;
use anyhow::Context;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Builds `<pm> run <script> new <target>`.
pub fn generator_command_line(package_manager: PackageManager, script: &str, target: &str) -> String {
    format!("{} run {} new {}", package_manager.command(), script, target)
}

/// Runs `command_line` through the platform shell in `cwd` and waits for it.
///
/// # Errors
///
/// - The shell could not be spawned.
/// - The command exited unsuccessfully (`QwikgenError::ExternalCommand`).
pub async fn run_in_shell(command_line: &str, cwd: &Path) -> Result<()> {
    info!("Running '{}' in {}", command_line, cwd.display());

    let mut command = shell_command(command_line);
    command
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = command
        .status()
        .await
        .with_context(|| format!("Failed to start shell for '{}'", command_line))?;
    debug!("'{}' exited with {}", command_line, status);

    if !status.success() {
        anyhow::bail!(QwikgenError::ExternalCommand {
            cmd: command_line.to_string(),
            status: status.to_string(),
        });
    }
    Ok(())
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    // `cmd` does not undo MSVC argument escaping; the line must reach it verbatim.
    let mut command = Command::new("cmd");
    command.arg("/C").raw_arg(command_line);
    command
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}
