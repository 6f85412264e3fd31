//! # qwikgen Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module finds template files on disk and turns them into the content
//! of generated files. It handles template lookup, placeholder substitution,
//! and relative-import adjustment for nested routes.
//!
//! ## Architecture
//!
//! Templates are plain text files named after their kind:
//!
//! | Kind  | File                 | Generated file             |
//! |-------|----------------------|----------------------------|
//! | Route | `routeComponent.txt` | `src/pages/**/<name>.astro` |
//! | Tsx   | `tsxComponent.txt`   | `<name>/<name>.tsx`        |
//! | Jsx   | `jsxComponent.txt`   | `<name>/<name>.jsx`        |
//!
//! `TemplateResolver` looks for a template in this order:
//! 1. the primary directory (`templates.directory` from the configuration)
//! 2. the installation directory (`templates/` next to the executable)
//! 3. a depth-first search of each search root, skipping entries whose names
//!    start with `.` or `_`; the first file whose name ends with the template
//!    file name wins
//!
//! `instantiate` then fills in the `[name]` placeholder for component
//! templates. Route templates carry no placeholder and are returned as is;
//! nested routes go through `nest_relative_imports` instead.
//!
//! ## Examples
//!
//! ```rust
//! let resolver = TemplateResolver::from_config(&cfg);
//! let template = resolver.resolve(TemplateKind::Tsx)?;
//! let content = templating::instantiate(&template, TemplateKind::Tsx, Some("my-card"), false);
//! // `export const MyCard = component$<MyCardProps>(...)`
//! ```
//!
use crate::common::fs::io;
use crate::core::config::Config;
use crate::core::error::{QwikgenError, Result};
use anyhow::{anyhow, Context};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Placeholder replaced by the component identifier.
pub const NAME_PLACEHOLDER: &str = "[name]";

const MALFORMED_PROPS: &str = "interface[name]Props";
const FIXED_PROPS: &str = "interface [name]Props";
const MODERN_CORE_IMPORT: &str = "@qwik.dev/core";
const LEGACY_CORE_IMPORT: &str = "@builder.io/qwik";
const PARENT_DIR_PREFIX: &str = "../";
const NESTED_PARENT_DIR_PREFIX: &str = "../../";

/// The template files qwikgen knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Route,
    Tsx,
    Jsx,
}

impl TemplateKind {
    /// File name of the template on disk, e.g. `tsxComponent.txt`.
    pub fn file_name(&self) -> String {
        format!("{}Component.txt", self)
    }

    /// Extension of the generated file.
    pub fn output_extension(&self) -> &'static str {
        match self {
            TemplateKind::Route => "astro",
            TemplateKind::Tsx => "tsx",
            TemplateKind::Jsx => "jsx",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Route => write!(f, "route"),
            TemplateKind::Tsx => write!(f, "tsx"),
            TemplateKind::Jsx => write!(f, "jsx"),
        }
    }
}

/// Locates and reads template files.
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    primary_dir: PathBuf,
    install_dir: Option<PathBuf>,
    search_roots: Vec<PathBuf>,
}

impl TemplateResolver {
    pub fn new(primary_dir: PathBuf, install_dir: Option<PathBuf>, search_roots: Vec<PathBuf>) -> Self {
        TemplateResolver {
            primary_dir,
            install_dir,
            search_roots,
        }
    }

    /// Builds the resolver used by the commands.
    ///
    /// Search roots, in order: the executable's directory, the source
    /// checkout the binary was built from, then `templates.search_roots`.
    pub fn from_config(cfg: &Config) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let source_root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .map(Path::to_path_buf);

        let mut search_roots: Vec<PathBuf> = exe_dir.iter().cloned().collect();
        search_roots.extend(source_root);
        search_roots.extend(cfg.templates.search_roots.iter().map(PathBuf::from));

        TemplateResolver::new(
            PathBuf::from(&cfg.templates.directory),
            exe_dir.map(|dir| dir.join("templates")),
            search_roots,
        )
    }

    /// Returns the path of the template for `kind`.
    pub fn locate(&self, kind: TemplateKind) -> Result<PathBuf> {
        let file_name = kind.file_name();

        let primary = self.primary_dir.join(&file_name);
        if primary.is_file() {
            debug!("Using template from primary location: {}", primary.display());
            return Ok(primary);
        }

        if let Some(install_dir) = &self.install_dir {
            let installed = install_dir.join(&file_name);
            if installed.is_file() {
                debug!("Using installed template: {}", installed.display());
                return Ok(installed);
            }
        }

        for root in &self.search_roots {
            if !root.is_dir() {
                debug!("Skipping missing template search root: {}", root.display());
                continue;
            }
            if let Some(found) = search_file(root, &file_name) {
                info!("Found template '{}' at {}", file_name, found.display());
                return Ok(found);
            }
        }

        Err(anyhow!(QwikgenError::TemplateNotFound { name: file_name }))
    }

    /// Locates and reads the template for `kind`.
    pub fn resolve(&self, kind: TemplateKind) -> Result<String> {
        let path = self.locate(kind)?;
        io::read_file_to_string(&path)
            .with_context(|| format!("Failed to read template file '{}'", path.display()))
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .starts_with(['.', '_'])
}

/// Depth-first search for a file whose name ends with `file_name`.
///
/// Entries are visited sorted by name and a directory's contents are
/// searched before its later siblings. Entries starting with `.` or `_`
/// are skipped along with everything below them.
pub fn search_file(root: &Path, file_name: &str) -> Option<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to access entry during template search in '{}': {}",
                    root.display(),
                    e
                );
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(file_name)
        {
            return Some(entry.into_path());
        }
    }
    None
}

/// Fills in a template.
///
/// Route templates are returned untouched. For component templates with a
/// name, the identifier is `pascal_case(name)`:
/// 1. `interface[name]Props` is corrected to `interface [name]Props`
/// 2. every `[name]` becomes the identifier
/// 3. with `legacy_qwik`, the first `@qwik.dev/core` import becomes `@builder.io/qwik`
pub fn instantiate(
    template: &str,
    kind: TemplateKind,
    component_name: Option<&str>,
    legacy_qwik: bool,
) -> String {
    if kind == TemplateKind::Route {
        return template.to_string();
    }
    let Some(name) = component_name else {
        return template.to_string();
    };

    let identifier = crate::core::naming::pascal_case(name);
    debug!("Instantiating {} template for '{}'", kind, identifier);

    let mut content = template
        .replace(MALFORMED_PROPS, FIXED_PROPS)
        .replace(NAME_PLACEHOLDER, &identifier);

    if legacy_qwik {
        debug!("Legacy Qwik project, rewriting core import");
        content = content.replacen(MODERN_CORE_IMPORT, LEGACY_CORE_IMPORT, 1);
    }
    content
}

/// Deepens relative imports for a route placed `extra_levels` directories
/// below the pages root.
///
/// Each level rewrites every `../` to `../../`, so the prefix compounds:
/// one level turns `../` into `../../`, two levels into `../../../../`.
pub fn nest_relative_imports(template: &str, extra_levels: usize) -> String {
    let mut content = template.to_string();
    for _ in 0..extra_levels {
        content = content.replace(PARENT_DIR_PREFIX, NESTED_PARENT_DIR_PREFIX);
    }
    content
}
