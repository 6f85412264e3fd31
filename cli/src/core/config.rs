//! # qwikgen Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for qwikgen, handling
//! loading, merging, validation, and access to configuration data. It supports
//! a multi-level configuration approach that combines defaults, user settings,
//! and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. `QWIKGEN_TEMPLATES_DIR` environment variable (template directory only)
//! 2. Project-specific `.qwikgen.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/qwikgen/config.toml`)
//! 4. Default values defined in the code
//!
//! ## Example
//!
//! ```toml
//! [templates]
//! directory = "~/.config/qwikgen/templates"
//! search_roots = ["~/src/qwikgen"]
//!
//! [generator]
//! script = "qwik"
//!
//! [layout]
//! components_dir = "src/components/qwik"
//! pages_dir = "src/pages"
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{QwikgenError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Where template files (`routeComponent.txt`, `tsxComponent.txt`, ...) are looked up.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Primary template directory (can use ~). Will be expanded.
    #[serde(default = "default_templates_dir")]
    pub directory: String,
    /// Extra roots for the fallback recursive search (can use ~).
    #[serde(default)]
    pub search_roots: Vec<String>,
}

/// Settings for the package-manager driven generator (`<pm> run <script> new ...`).
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_script")]
    pub script: String,
}

/// Project-relative directories the Astro writers create files under.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        TemplatesConfig {
            directory: default_templates_dir(),
            search_roots: Vec::new(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            script: default_generator_script(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            components_dir: default_components_dir(),
            pages_dir: default_pages_dir(),
        }
    }
}

fn default_templates_dir() -> String {
    "~/.config/qwikgen/templates".to_string()
}
fn default_generator_script() -> String {
    "qwik".to_string()
}
fn default_components_dir() -> String {
    "src/components/qwik".to_string()
}
fn default_pages_dir() -> String {
    "src/pages".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".qwikgen.toml";
/// Overrides `templates.directory` when set.
pub const TEMPLATES_DIR_ENV: &str = "QWIKGEN_TEMPLATES_DIR";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_env_overrides(&mut merged_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "qwikgen", "qwikgen") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.qwikgen.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.templates.directory = if project_cfg.templates.directory != default_templates_dir() {
        project_cfg.templates.directory
    } else {
        user.templates.directory
    };
    // Project roots are searched before the user's.
    merged.templates.search_roots = project_cfg
        .templates
        .search_roots
        .into_iter()
        .chain(user.templates.search_roots)
        .collect();
    merged.generator.script = if project_cfg.generator.script != default_generator_script() {
        project_cfg.generator.script
    } else {
        user.generator.script
    };
    merged.layout.components_dir =
        if project_cfg.layout.components_dir != default_components_dir() {
            project_cfg.layout.components_dir
        } else {
            user.layout.components_dir
        };
    merged.layout.pages_dir = if project_cfg.layout.pages_dir != default_pages_dir() {
        project_cfg.layout.pages_dir
    } else {
        user.layout.pages_dir
    };
    merged
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
        if !dir.trim().is_empty() {
            debug!("Template directory overridden by {}: {}", TEMPLATES_DIR_ENV, dir);
            config.templates.directory = dir;
        }
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    config.templates.directory = shellexpand::tilde(&config.templates.directory).into_owned();
    debug!("Expanded template directory: {}", config.templates.directory);
    for root in &mut config.templates.search_roots {
        *root = shellexpand::tilde(root).into_owned();
        debug!("Expanded template search root: {}", root);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let templates_dir = PathBuf::from(&config.templates.directory);
    if !templates_dir.exists() {
        debug!(
            "Configured template directory '{}' does not exist, the fallback search will be used.",
            templates_dir.display()
        );
    } else if !templates_dir.is_dir() {
        return Err(anyhow!(QwikgenError::Config(format!(
            "Configured template path '{}' exists but is not a directory.",
            templates_dir.display()
        ))));
    }
    if config.generator.script.trim().is_empty() {
        return Err(anyhow!(QwikgenError::Config(
            "Generator script name cannot be empty.".to_string()
        )));
    }
    for (key, dir) in [
        ("layout.components_dir", &config.layout.components_dir),
        ("layout.pages_dir", &config.layout.pages_dir),
    ] {
        if Path::new(dir).is_absolute() {
            return Err(anyhow!(QwikgenError::Config(format!(
                "'{}' must be relative to the workspace root, got '{}'.",
                key, dir
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [templates]
            directory = "~/my_templates"
            search_roots = ["/opt/qwikgen"]

            [generator]
            script = "qwik-gen"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.templates.directory, "~/my_templates"); // Not yet expanded
        assert_eq!(config.templates.search_roots, vec!["/opt/qwikgen"]);
        assert_eq!(config.generator.script, "qwik-gen");
        assert_eq!(config.layout.components_dir, default_components_dir()); // Default
        assert_eq!(config.layout.pages_dir, "src/pages");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[generator]\nshell = \"zsh\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            templates: TemplatesConfig {
                directory: "~/tpl_test".to_string(),
                search_roots: vec!["~/roots".to_string(), "/absolute/root".to_string()],
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.templates.directory,
            home_dir.join("tpl_test").to_string_lossy()
        );
        assert_eq!(
            config.templates.search_roots[0],
            home_dir.join("roots").to_string_lossy()
        );
        assert_eq!(config.templates.search_roots[1], "/absolute/root");
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = Config {
            templates: TemplatesConfig {
                directory: "/user/templates".into(),
                search_roots: vec!["/user/root".into()],
            },
            generator: GeneratorConfig {
                script: "user-gen".into(),
            },
            ..Default::default()
        };
        let project = Config {
            templates: TemplatesConfig {
                search_roots: vec!["/project/root".into()],
                ..Default::default()
            },
            layout: LayoutConfig {
                pages_dir: "app/pages".into(),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.templates.directory, "/user/templates");
        assert_eq!(
            merged.templates.search_roots,
            vec!["/project/root", "/user/root"]
        );
        assert_eq!(merged.generator.script, "user-gen");
        assert_eq!(merged.layout.pages_dir, "app/pages");
        assert_eq!(merged.layout.components_dir, default_components_dir());
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let nested = temp_dir.path().join("src/routes");
        fs::create_dir_all(&nested).unwrap();

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME)));
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_validate_config_valid() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            templates: TemplatesConfig {
                directory: temp_dir.path().to_string_lossy().to_string(),
                search_roots: Vec::new(),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_template_path_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            templates: TemplatesConfig {
                directory: file_path.to_string_lossy().to_string(),
                search_roots: Vec::new(),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_validate_config_rejects_empty_script_and_absolute_layout() {
        let mut config = Config::default();
        config.generator.script = "  ".into();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.layout.pages_dir = "/srv/pages".into();
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("layout.pages_dir"));
    }
}
