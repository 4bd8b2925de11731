//! Keyboard actions and the shortcut map.

use std::fmt;
use std::str::FromStr;

use super::{Editor, Tool};
use crate::transform::FlipAxis;
use freeboard_core::{KeyCombo, KeyEvent, ShortcutError};
use freeboard_settings::Config;
use tracing::{trace, warn};

/// Anything a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    Undo,
    Redo,
    Delete,
    Copy,
    Paste,
    Duplicate,
    SelectAll,
    ClearSelection,
    BringToFront,
    SendToBack,
    BringForward,
    SendBackward,
    FlipHorizontal,
    FlipVertical,
    SetTool(Tool),
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Delete => "delete",
            Self::Copy => "copy",
            Self::Paste => "paste",
            Self::Duplicate => "duplicate",
            Self::SelectAll => "select_all",
            Self::ClearSelection => "clear_selection",
            Self::BringToFront => "bring_to_front",
            Self::SendToBack => "send_to_back",
            Self::BringForward => "bring_forward",
            Self::SendBackward => "send_backward",
            Self::FlipHorizontal => "flip_horizontal",
            Self::FlipVertical => "flip_vertical",
            Self::SetTool(tool) => return write!(f, "tool_{tool}"),
        };
        write!(f, "{name}")
    }
}

impl FromStr for EditorAction {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s.trim() {
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "delete" => Self::Delete,
            "copy" => Self::Copy,
            "paste" => Self::Paste,
            "duplicate" => Self::Duplicate,
            "select_all" => Self::SelectAll,
            "clear_selection" => Self::ClearSelection,
            "bring_to_front" => Self::BringToFront,
            "send_to_back" => Self::SendToBack,
            "bring_forward" => Self::BringForward,
            "send_backward" => Self::SendBackward,
            "flip_horizontal" => Self::FlipHorizontal,
            "flip_vertical" => Self::FlipVertical,
            other => match other.strip_prefix("tool_") {
                Some(tool) => Self::SetTool(tool.parse()?),
                None => {
                    return Err(ShortcutError::UnknownAction {
                        action: s.to_string(),
                    })
                }
            },
        };
        Ok(action)
    }
}

/// Key combinations bound to editor actions, first match wins.
#[derive(Debug, Clone, Default)]
pub struct ShortcutMap {
    bindings: Vec<(KeyCombo, EditorAction)>,
}

impl ShortcutMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from the `shortcuts` section of `config`. Unknown
    /// actions and unparsable combos are skipped with a warning.
    pub fn from_config(config: &Config) -> Self {
        let mut map = Self::new();
        for (name, combos) in &config.shortcuts {
            let action = match name.parse::<EditorAction>() {
                Ok(action) => action,
                Err(err) => {
                    warn!(%err, "ignoring shortcut");
                    continue;
                }
            };
            for combo in combos {
                match combo.parse::<KeyCombo>() {
                    Ok(combo) => map.bind(combo, action),
                    Err(err) => warn!(%err, action = %name, "ignoring shortcut"),
                }
            }
        }
        map
    }

    /// Binds `combo` to `action`, replacing an earlier binding of `combo`.
    pub fn bind(&mut self, combo: KeyCombo, action: EditorAction) {
        self.bindings.retain(|(bound, _)| *bound != combo);
        self.bindings.push((combo, action));
    }

    pub fn resolve(&self, event: &KeyEvent) -> Option<EditorAction> {
        self.bindings
            .iter()
            .find(|(combo, _)| combo.matches(event))
            .map(|(_, action)| *action)
    }

    /// Combos bound to `action`.
    pub fn combos_for(&self, action: EditorAction) -> Vec<&KeyCombo> {
        self.bindings
            .iter()
            .filter(|(_, bound)| *bound == action)
            .map(|(combo, _)| combo)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Editor {
    /// Resolves a key press through the shortcut map and performs it.
    /// Returns whether the key triggered anything.
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        match self.shortcuts.resolve(event) {
            Some(action) => self.perform(action),
            None => {
                trace!(key = %event.key, "unbound key");
                false
            }
        }
    }

    /// Performs `action`. Returns whether it changed anything.
    pub fn perform(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::Delete => self.delete_selected() > 0,
            EditorAction::Copy => self.copy_selected() > 0,
            EditorAction::Paste => !self.paste().is_empty(),
            EditorAction::Duplicate => !self.duplicate_selected().is_empty(),
            EditorAction::SelectAll => self.select_all(),
            EditorAction::ClearSelection => self.clear_selection(),
            EditorAction::BringToFront => self.bring_to_front(),
            EditorAction::SendToBack => self.send_to_back(),
            EditorAction::BringForward => self.bring_forward(),
            EditorAction::SendBackward => self.send_backward(),
            EditorAction::FlipHorizontal => self.flip_selected(FlipAxis::Horizontal),
            EditorAction::FlipVertical => self.flip_selected(FlipAxis::Vertical),
            EditorAction::SetTool(tool) => {
                let changed = self.tool != tool;
                self.set_tool(tool);
                changed
            }
        }
    }
}
