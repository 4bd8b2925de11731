//! Settings Persistence
//!
//! Handles locating, loading and saving the configuration file, and applies
//! individual `section.key` edits coming from a host's preferences surface.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use freeboard_core::StylePatch;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory.
const APP_DIR: &str = "freeboard";

/// File name used inside the configuration directory.
const CONFIG_FILE: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone, Default)]
pub struct SettingsPersistence {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config and no backing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Default per-user config file, e.g. `~/.config/freeboard/config.toml`.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist yet. A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self {
                config: Config::default(),
                path: Some(path.to_path_buf()),
            })
        }
    }

    /// Save settings to the file they were loaded from
    pub fn save(&self) -> SettingsResult<()> {
        let path = self.path.as_deref().ok_or_else(|| {
            SettingsError::ConfigDirectory("settings have no backing file".into())
        })?;
        self.save_to_file(path)
    }

    /// Save settings to file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.config.save_to_file(path)
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.config.validate()?;
        Ok(())
    }

    /// Updates one setting addressed as `section.key`.
    ///
    /// Numeric canvas and history keys take plain numbers; `style.*` and
    /// `arrow.*` keys take the same names and values as the style panel;
    /// `shortcuts.<action>` takes a comma separated list of key combos.
    /// The config is left untouched when the result would not validate.
    pub fn set_value(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        let invalid = |reason: String| SettingsError::InvalidSetting {
            key: key.to_string(),
            reason,
        };
        let (section, name) = key
            .split_once('.')
            .ok_or_else(|| invalid("expected section.key".to_string()))?;

        let mut updated = self.config.clone();
        match (section, name) {
            ("canvas", _) => {
                let number = parse_number(value).map_err(invalid)?;
                match name {
                    "min_element_size" => updated.canvas.min_element_size = number,
                    "hit_tolerance" => updated.canvas.hit_tolerance = number,
                    "paste_offset" => updated.canvas.paste_offset = number,
                    "arrowhead_length" => updated.canvas.arrowhead_length = number,
                    _ => return Err(invalid("unknown canvas setting".to_string())),
                }
            }
            ("history", "max_depth") => {
                updated.history.max_depth = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(format!("'{value}' is not a whole number")))?;
            }
            ("style", _) | ("arrow", _) => {
                let mut patch = StylePatch::new();
                patch
                    .set(name, value)
                    .map_err(|err| invalid(err.to_string()))?;
                if section == "arrow" && !patch.touches_arrow() {
                    return Err(invalid("not an arrow setting".to_string()));
                }
                updated.style.apply(&patch);
                updated.arrow.apply(&patch);
            }
            ("shortcuts", action) => {
                let combos: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                updated.shortcuts.insert(action.to_string(), combos);
            }
            _ => return Err(invalid("unknown setting".to_string())),
        }

        updated.validate()?;
        self.config = updated;
        Ok(())
    }
}

fn parse_number(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{value}' is not a number"))
}
