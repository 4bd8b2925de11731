//! Configuration and settings management for Freeboard
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Canvas tuning (degenerate-size threshold, hit tolerance, paste offset)
//! - History depth
//! - Default element and arrow style used for newly drawn elements
//! - Keyboard shortcuts (action name to key combinations)

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use freeboard_core::constants::{
    DEFAULT_ARROWHEAD_LENGTH, DEFAULT_HISTORY_DEPTH, DEFAULT_HIT_TOLERANCE,
    DEFAULT_MIN_ELEMENT_SIZE, DEFAULT_PASTE_OFFSET,
};
use freeboard_core::{ArrowStyle, ElementStyle, KeyCombo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Canvas interaction tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Shapes smaller than this in both dimensions are discarded on release
    pub min_element_size: f64,
    /// Pointer slack used when hit-testing strokes and shape edges
    pub hit_tolerance: f64,
    /// Offset applied to pasted and duplicated elements
    pub paste_offset: f64,
    /// Length of an open arrowhead barb
    pub arrowhead_length: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            min_element_size: DEFAULT_MIN_ELEMENT_SIZE,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            paste_offset: DEFAULT_PASTE_OFFSET,
            arrowhead_length: DEFAULT_ARROWHEAD_LENGTH,
        }
    }
}

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept, including the initial one
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Default keyboard bindings, keyed by editor action name.
pub fn default_shortcuts() -> BTreeMap<String, Vec<String>> {
    let bindings: [(&str, &[&str]); 22] = [
        ("undo", &["Ctrl+Z"]),
        ("redo", &["Ctrl+Shift+Z", "Ctrl+Y"]),
        ("delete", &["Delete", "Backspace"]),
        ("copy", &["Ctrl+C"]),
        ("paste", &["Ctrl+V"]),
        ("duplicate", &["Ctrl+D"]),
        ("select_all", &["Ctrl+A"]),
        ("clear_selection", &["Escape"]),
        // Hosts on US layouts report the shifted bracket glyphs.
        ("bring_to_front", &["Ctrl+Shift+]", "Ctrl+Shift+}"]),
        ("send_to_back", &["Ctrl+Shift+[", "Ctrl+Shift+{"]),
        ("bring_forward", &["Ctrl+]"]),
        ("send_backward", &["Ctrl+["]),
        ("flip_horizontal", &["Shift+H"]),
        ("flip_vertical", &["Shift+V"]),
        ("tool_select", &["V", "1"]),
        ("tool_rectangle", &["R", "2"]),
        ("tool_diamond", &["D", "3"]),
        ("tool_ellipse", &["O", "4"]),
        ("tool_arrow", &["A", "5"]),
        ("tool_line", &["L", "6"]),
        ("tool_freehand", &["P", "7"]),
        ("tool_eraser", &["E", "0"]),
    ];

    bindings
        .iter()
        .map(|(action, combos)| {
            (
                action.to_string(),
                combos.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
/// Every section is optional in a file; missing sections take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas interaction tuning
    pub canvas: CanvasSettings,
    /// Undo/redo settings
    pub history: HistorySettings,
    /// Style applied to newly drawn elements
    pub style: ElementStyle,
    /// Heads and routing applied to newly drawn arrows
    pub arrow: ArrowStyle,
    /// Action name to key combinations
    pub shortcuts: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasSettings::default(),
            history: HistorySettings::default(),
            style: ElementStyle::default(),
            arrow: ArrowStyle::default(),
            shortcuts: default_shortcuts(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let non_negative = [
            ("canvas.min_element_size", self.canvas.min_element_size),
            ("canvas.hit_tolerance", self.canvas.hit_tolerance),
            ("canvas.paste_offset", self.canvas.paste_offset),
            ("canvas.arrowhead_length", self.canvas.arrowhead_length),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if self.history.max_depth < 2 {
            return Err(ConfigError::ValueOutOfRange {
                key: "history.max_depth".to_string(),
                value: self.history.max_depth.to_string(),
            });
        }

        self.style.validate()?;
        self.parsed_shortcuts()?;

        Ok(())
    }

    /// Parses every configured shortcut into `(action, combo)` pairs.
    ///
    /// Action names are not checked here; the editor owns the action set
    /// and ignores names it does not know.
    pub fn parsed_shortcuts(&self) -> ConfigResult<Vec<(String, KeyCombo)>> {
        let mut parsed = Vec::new();
        for (action, combos) in &self.shortcuts {
            for combo in combos {
                let key_combo =
                    combo
                        .parse::<KeyCombo>()
                        .map_err(|source| ConfigError::Shortcut {
                            action: action.clone(),
                            source,
                        })?;
                parsed.push((action.clone(), key_combo));
            }
        }
        Ok(parsed)
    }
}

/// On-disk configuration formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
