//! Configuration system for bsmotion.
//!
//! This module provides the configuration structure for bsmotion with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is loaded
//! from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use bsmotion::config::Config;
//! use bsmotion::jump::Scope;
//!
//! let config: Config = toml::from_str(r#"
//!     jump_key = "f"
//!
//!     [jump]
//!     scope = "buffer"
//!
//!     [jump.keys]
//!     up = ["k"]
//!     down = ["j"]
//! "#).unwrap();
//!
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.jump_key, 'f');
//! assert_eq!(config.jump.scope, Scope::Buffer);
//! assert!(config.jump.keys.left.is_empty());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::jump::keys::KeyConflict;
use crate::jump::{
    HighlightGroups, JumpOptions, KeyBindings, ModeController, OverlayRenderer, OverlayStrategy,
    Scope,
};
use crate::jump::overlay::{DEFAULT_CURSOR_GROUP, DEFAULT_SHADE_GROUP};

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("conflicting jump keys: {}", describe_conflicts(.0))]
    KeyConflict(Vec<KeyConflict>),
}

fn describe_conflicts(conflicts: &[KeyConflict]) -> String {
    conflicts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Configuration for the bsmotion application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_line_numbers` - Display line numbers in the viewer (default: true)
/// * `jump_key` - Normal-mode key that enters jump mode (default: 's')
/// * `jump` - Jump-mode behavior and key bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display line numbers in the viewer
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Normal-mode key that enters jump mode
    #[serde(default = "default_jump_key")]
    pub jump_key: char,

    /// The `[jump]` table
    #[serde(default)]
    pub jump: JumpConfig,
}

/// The `[jump]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Region bounds on entry: "window" or "buffer"
    #[serde(default)]
    pub scope: Scope,

    /// Leave jump mode once either axis converges
    #[serde(default = "default_true")]
    pub auto_exit: bool,

    /// Pull the column back to the end of short lines (window scope)
    #[serde(default = "default_true")]
    pub clamp_to_line_width: bool,

    /// Overlay refresh strategy: "full" or "incremental"
    #[serde(default)]
    pub overlay: OverlayStrategy,

    /// Reject key lists whose triggers overlap instead of warning
    #[serde(default)]
    pub strict_keys: bool,

    /// Highlight group of the jump cursor cell
    #[serde(default = "default_cursor_group")]
    pub cursor_group: String,

    /// Highlight group of the shaded area
    #[serde(default = "default_shade_group")]
    pub shade_group: String,

    /// Trigger lists, each empty unless set
    #[serde(default)]
    pub keys: KeyBindings,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

/// Returns the default jump key.
fn default_jump_key() -> char {
    's'
}

fn default_true() -> bool {
    true
}

fn default_cursor_group() -> String {
    DEFAULT_CURSOR_GROUP.to_string()
}

fn default_shade_group() -> String {
    DEFAULT_SHADE_GROUP.to_string()
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Example
    ///
    /// ```
    /// use bsmotion::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.theme, "default-dark");
    /// assert_eq!(config.jump_key, 's');
    /// assert!(config.show_line_numbers);
    /// assert!(config.jump.keys.is_empty());
    /// ```
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_line_numbers: default_show_line_numbers(),
            jump_key: default_jump_key(),
            jump: JumpConfig::default(),
        }
    }
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            scope: Scope::default(),
            auto_exit: true,
            clamp_to_line_width: true,
            overlay: OverlayStrategy::default(),
            strict_keys: false,
            cursor_group: default_cursor_group(),
            shade_group: default_shade_group(),
            keys: KeyBindings::default(),
        }
    }
}

impl JumpConfig {
    /// Session options described by this table.
    pub fn options(&self) -> JumpOptions {
        JumpOptions {
            scope: self.scope,
            auto_exit: self.auto_exit,
            clamp_to_line_width: self.clamp_to_line_width,
        }
    }

    pub fn groups(&self) -> HighlightGroups {
        HighlightGroups {
            cursor: self.cursor_group.clone(),
            shade: self.shade_group.clone(),
        }
    }

    /// Builds an idle controller with these options and overlay settings.
    pub fn controller(&self) -> ModeController {
        ModeController::new(
            self.options(),
            OverlayRenderer::new(self.overlay, self.groups()),
        )
    }

    /// Checks the key lists for overlapping triggers.
    ///
    /// Conflicts are logged; with `strict_keys` they are an error instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let conflicts = self.keys.conflicts();
        if conflicts.is_empty() {
            return Ok(());
        }
        if self.strict_keys {
            return Err(ConfigError::KeyConflict(conflicts));
        }
        for conflict in &conflicts {
            warn!(%conflict, "overlapping jump key");
        }
        Ok(())
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/bsmotion/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("bsmotion");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be used.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            warn!(path = %config_path.display(), %err, "ignoring config file");
            Self::default()
        })
    }

    /// Loads and validates configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, doesn't parse, or has
    /// overlapping keys while `strict_keys` is set.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents)?;
        config.jump.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;

        Ok(())
    }
}
