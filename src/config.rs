//! Configuration module for the settings documentation exporter.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`confdoc.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CONFDOC_` and use double
//! underscores to separate nested levels:
//! - `CONFDOC_MARKDOWN__PATH=docs/Configuration.md` sets `markdown.path`
//! - `CONFDOC_DOTENV__ENABLED=false` sets `dotenv.enabled`
//! - `CONFDOC_RELATIVE_TO__ALIAS=<root>` sets `relative_to.alias`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the configuration file searched for in ancestor directories.
pub const CONFIG_FILE_NAME: &str = "confdoc.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Schema files to export documentation for
    #[serde(default)]
    pub schemas: Vec<PathBuf>,

    /// Project root directory (where confdoc.toml is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,

    /// Skip fields marked `exclude` in the schema
    #[serde(default = "default_true")]
    pub respect_exclude: bool,

    /// Absolute-path default rewriting
    #[serde(default)]
    pub relative_to: RelativeToConfig,

    /// Markdown generator settings
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Dotenv generator settings
    #[serde(default)]
    pub dotenv: DotenvConfig,

    /// Simple-text generator settings
    #[serde(default)]
    pub simple: SimpleConfig,
}

/// How absolute path defaults are rendered in generated documentation.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RelativeToConfig {
    /// Replace absolute paths under the project root with an alias
    #[serde(default = "default_true")]
    pub replace_abs_paths: bool,

    /// The alias shown in place of the project root
    #[serde(default = "default_alias")]
    pub alias: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MarkdownConfig {
    /// Enable the Markdown reference generation
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Output path, relative to the project root
    #[serde(default = "default_markdown_path")]
    pub path: PathBuf,

    /// Inject into `<!-- {region}:begin -->` / `<!-- {region}:end -->` markers
    /// instead of overwriting the whole file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DotenvConfig {
    /// Enable the dotenv example generation
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Output path, relative to the project root
    #[serde(default = "default_dotenv_path")]
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SimpleConfig {
    /// Enable the plain-text reference generation
    #[serde(default = "default_false")]
    pub enabled: bool,

    /// Output path, relative to the project root
    #[serde(default = "default_simple_path")]
    pub path: PathBuf,

    /// Inject between markers instead of overwriting the whole file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_alias() -> String {
    "<project-dir>".to_string()
}
fn default_markdown_path() -> PathBuf {
    PathBuf::from("Configuration.md")
}
fn default_dotenv_path() -> PathBuf {
    PathBuf::from(".env.example")
}
fn default_simple_path() -> PathBuf {
    PathBuf::from("Configuration.txt")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            schemas: Vec::new(),
            project_root: None,
            respect_exclude: true,
            relative_to: RelativeToConfig::default(),
            markdown: MarkdownConfig::default(),
            dotenv: DotenvConfig::default(),
            simple: SimpleConfig::default(),
        }
    }
}

impl Default for RelativeToConfig {
    fn default() -> Self {
        Self {
            replace_abs_paths: true,
            alias: default_alias(),
        }
    }
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_markdown_path(),
            region: None,
        }
    }
}

impl Default for DotenvConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_dotenv_path(),
        }
    }
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_simple_path(),
            region: None,
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path =
            Self::find_project_config().unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Layer in environment variables with CONFDOC_ prefix
            // Use double underscore (__) to separate nested levels
            // Single underscore (_) remains as is within field names
            .merge(Env::prefixed("CONFDOC_").map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".") // Double underscore becomes dot
                    .into()
            }))
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                // If project_root is not set in config, detect it
                if settings.project_root.is_none() {
                    settings.project_root = Self::project_root();
                }
                settings
            })
    }

    /// Find the project config by looking for confdoc.toml
    /// Searches from current directory up to root
    fn find_project_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_path = ancestor.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        None
    }

    /// Get the project root directory (where confdoc.toml is located)
    pub fn project_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            if ancestor.join(CONFIG_FILE_NAME).is_file() {
                return Some(ancestor.to_path_buf());
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, Box<figment::Error>> {
        let path = path.as_ref();
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CONFDOC_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.project_root.is_none() {
                    settings.project_root = path.parent().map(|p| p.to_path_buf());
                }
                settings
            })
    }

    /// The directory output paths and relative schema paths resolve against.
    pub fn root_dir(&self) -> PathBuf {
        self.project_root
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Save current configuration to file
    pub fn save(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        let template = r#"# Confdoc Configuration File
#
# Documentation is regenerated with `confdoc generate` and verified
# with `confdoc check`.

# Version of the configuration schema
version = 1

# Schema files describing your settings models (JSON or TOML)
schemas = []

# Skip fields marked `exclude = true` in the schema
respect_exclude = true

[relative_to]
# Replace absolute path defaults under the project root with the alias below
replace_abs_paths = true
alias = "<project-dir>"

[markdown]
# Markdown reference with one table per settings model
enabled = true
path = "Configuration.md"

# Inject between '<!-- configuration:begin -->' and '<!-- configuration:end -->'
# markers instead of overwriting the whole file
# region = "configuration"

[dotenv]
# Example .env file; optional fields are commented out
enabled = true
path = ".env.example"

[simple]
# Plain-text reference, one underlined section per field
enabled = false
path = "Configuration.txt"
"#;

        std::fs::write(&config_path, template)?;

        if force {
            println!("Overwrote configuration at: {}", config_path.display());
        } else {
            println!(
                "Created default configuration at: {}",
                config_path.display()
            );
        }

        Ok(config_path)
    }
}
