//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Local config: `<dir>/.rstree.toml` (directory being rendered)
//! 4. Environment variables: `RSTREE_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use colored::Color;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::lazy::{FillLimits, DEFAULT_MAX_ENTRY};
use crate::render::{RenderOptions, TreeStyle};

/// Unified configuration for rstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Connector glyphs (default: unicode)
    pub style: TreeStyle,
    /// Connector color name, "none" disables coloring (default: bright yellow)
    pub color: String,
    /// Maximum fill depth below the root (default: unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Maximum number of nodes created by a fill (default: 2000)
    pub max_entry: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: TreeStyle::Unicode,
            color: "bright yellow".into(),
            max_depth: None,
            max_entry: DEFAULT_MAX_ENTRY,
        }
    }
}

/// Raw settings for intermediate parsing (all optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub style: Option<TreeStyle>,
    pub color: Option<String>,
    pub max_depth: Option<usize>,
    pub max_entry: Option<usize>,
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".rstree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> CliResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| CliError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            color: overlay.color.clone().unwrap_or_else(|| self.color.clone()),
            max_depth: overlay.max_depth.or(self.max_depth),
            max_entry: overlay.max_entry.unwrap_or(self.max_entry),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.rstree.toml`
    pub fn load(local_dir: Option<&Path>) -> CliResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply RSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> CliResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RSTREE").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("style") {
            settings.style = val.parse().map_err(|message| CliError::Config { message })?;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_string("max_depth") {
            settings.max_depth = Some(parse_count("RSTREE_MAX_DEPTH", &val)?);
        }
        if let Ok(val) = config.get_string("max_entry") {
            settings.max_entry = parse_count("RSTREE_MAX_ENTRY", &val)?;
        }

        Ok(settings)
    }

    /// Connector color, None when coloring is switched off.
    pub fn color_choice(&self) -> CliResult<Option<Color>> {
        let name = self.color.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        name.parse::<Color>()
            .map(Some)
            .map_err(|_| CliError::Config {
                message: format!("unknown color: {}", name),
            })
    }

    pub fn render_options(&self) -> CliResult<RenderOptions> {
        Ok(RenderOptions {
            style: self.style,
            color: self.color_choice()?,
        })
    }

    pub fn fill_limits(&self) -> FillLimits {
        FillLimits {
            max_depth: self.max_depth.unwrap_or(usize::MAX),
            max_entry: self.max_entry,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rstree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rstree/rstree.toml
#   Local:  <dir>/.rstree.toml
#   Env:    RSTREE_* environment variables

# Connector glyphs: "unicode" or "ascii"
# style = "unicode"

# Connector color ("none" disables)
# color = "bright yellow"

# Directory levels expanded below the root (unbounded if unset)
# max_depth = 3

# Maximum number of entries read
# max_entry = 2000
"#
        .to_string()
    }
}

fn parse_count(name: &str, val: &str) -> CliResult<usize> {
    val.trim().parse().map_err(|_| CliError::Config {
        message: format!("{name}: not a count: {val}"),
    })
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}
