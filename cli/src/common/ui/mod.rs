//! # qwikgen UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction for the scaffolding commands. Commands never read
//! stdin directly: they go through the `Prompt` trait, so the terminal
//! implementation can be swapped for a scripted one in tests.
//!
//! ## Architecture
//!
//! - **`prompt`**: the `Prompt` trait (question, placeholder, validator →
//!   answer or cancellation), the stdin-backed `TerminalPrompt`, and
//!   `read_name`, which takes a name from the command line or asks for it.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::prompt::{self, TerminalPrompt};
//!
//! let mut terminal = TerminalPrompt::stdin();
//! let name = prompt::read_name(args.name, ArtifactKind::Route, &mut terminal, &prompt::ROUTE_PROMPT)?;
//! ```
//!

/// The `Prompt` capability and its terminal implementation.
pub mod prompt;
