//! # qwikgen Commands
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level subcommand. Each exposes an `*Args` struct parsed
//! by clap and an async `handle_*` function called from `main`.
//!
//! Subcommands of a group (e.g. `astro component`) are declared inside the
//! group's own `mod.rs`.
//!

/// `qwikgen astro`: write components and pages into Qwik Astro projects.
pub mod astro;
/// `qwikgen component`: Qwik City component through the project generator.
pub mod component;
/// `qwikgen docs`: documentation URL for a symbol.
pub mod docs;
/// `qwikgen route`: Qwik City route through the project generator.
pub mod route;
/// `qwikgen ui`: Qwik UI documentation URL.
pub mod ui;
