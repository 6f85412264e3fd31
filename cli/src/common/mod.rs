//! # qwikgen Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers used by the command handlers:
//! - `fs`: Filesystem reads and never-overwrite writes
//! - `process`: Generator command lines and shell execution
//! - `ui`: Interactive prompts
//!
pub mod fs;
pub mod process;
pub mod ui;
