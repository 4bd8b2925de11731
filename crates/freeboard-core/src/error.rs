//! Error handling for Freeboard
//!
//! The canvas core itself has no fatal error class: dangling bindings,
//! degenerate shapes, empty selections and history boundaries all degrade
//! to no-ops. Errors only arise at the edges where text from a host is
//! interpreted:
//! - Style errors (style-panel values given as strings)
//! - Shortcut errors (key combinations from configuration)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Style error type
///
/// Raised when a style-panel value cannot be interpreted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// Color string is not `#rgb`, `#rrggbb` or `#rrggbbaa`
    #[error("Invalid color '{value}'")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },

    /// Named option does not exist for the given style attribute
    #[error("Unknown {attribute} '{value}'")]
    UnknownOption {
        /// The style attribute being parsed (e.g. "stroke pattern").
        attribute: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Numeric value is outside of its valid range
    #[error("{attribute} out of range: {value}")]
    OutOfRange {
        /// The style attribute being validated.
        attribute: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Shortcut error type
///
/// Raised when a keyboard shortcut string cannot be parsed or bound.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    /// Shortcut string has no key after the modifiers
    #[error("Shortcut '{combo}' has no key")]
    MissingKey {
        /// The rejected shortcut string.
        combo: String,
    },

    /// Modifier name is not recognised
    #[error("Unknown modifier '{modifier}' in shortcut '{combo}'")]
    UnknownModifier {
        /// The unrecognised modifier.
        modifier: String,
        /// The shortcut string it appeared in.
        combo: String,
    },

    /// Action name is not recognised
    #[error("Unknown editor action '{action}'")]
    UnknownAction {
        /// The unrecognised action name.
        action: String,
    },
}

/// Main error type for Freeboard
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Style error
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Shortcut error
    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a style error
    pub fn is_style_error(&self) -> bool {
        matches!(self, Error::Style(_))
    }

    /// Check if this is a shortcut error
    pub fn is_shortcut_error(&self) -> bool {
        matches!(self, Error::Shortcut(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
