//! # qwikgen Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The domain of qwikgen, independent of the command line:
//! - `naming`: Route/component name normalization, validation and PascalCase identifiers
//! - `templating`: Template lookup (`TemplateResolver`) and instantiation
//! - `project`: Workspace detection, `package.json` and package manager (`ProjectContext`)
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types (`QwikgenError`) and the `Result` alias
//!
//! ```rust
//! use crate::core::error::{QwikgenError, Result};
//! use crate::core::naming;
//! use crate::core::project::ProjectContext;
//! ```
//!
pub mod config;
pub mod error;
pub mod naming;
pub mod project;
pub mod templating;
