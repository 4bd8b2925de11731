//! Input-surface vocabulary: modifier flags, key events and key combinations.

use crate::error::ShortcutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Modifier keys held during a pointer or key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Ctrl on most platforms, Cmd on macOS; either counts as the command key.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key press delivered by the input surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key name as reported by the host ("z", "Delete", "ArrowUp", "]").
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// A key together with the modifiers that must be held, e.g. `Ctrl+Shift+Z`.
///
/// `Ctrl` in a combo matches either Ctrl or Meta so one binding serves both
/// platform conventions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key.eq_ignore_ascii_case(&event.key)
            && self.modifiers.shift == event.modifiers.shift
            && self.modifiers.alt == event.modifiers.alt
            && self.modifiers.ctrl == event.modifiers.command()
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for KeyCombo {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A trailing "+" is the plus key itself ("Ctrl++").
        let (head, key) = match s.strip_suffix("++") {
            Some(rest) => (rest, "+".to_string()),
            None => match s.rsplit_once('+') {
                Some((rest, key)) => (rest, key.trim().to_string()),
                None => ("", s.trim().to_string()),
            },
        };

        if key.is_empty() {
            return Err(ShortcutError::MissingKey {
                combo: s.to_string(),
            });
        }

        let mut modifiers = Modifiers::NONE;
        for part in head.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" | "cmd" | "meta" | "super" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" | "option" => modifiers.alt = true,
                _ => {
                    return Err(ShortcutError::UnknownModifier {
                        modifier: part.to_string(),
                        combo: s.to_string(),
                    })
                }
            }
        }

        Ok(Self { key, modifiers })
    }
}
