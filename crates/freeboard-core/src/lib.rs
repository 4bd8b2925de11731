//! # Freeboard Core
//!
//! Core types shared by every Freeboard crate:
//! element identifiers, the style vocabulary used by elements, the style panel
//! and configuration, input-surface key and modifier types, numeric defaults
//! and the unified error type.

pub mod constants;
pub mod error;
pub mod id;
pub mod input;
pub mod style;

pub use error::{Error, Result, ShortcutError, StyleError};
pub use id::ElementId;
pub use input::{KeyCombo, KeyEvent, Modifiers};
pub use style::{
    ArrowHead, ArrowStyle, Color, ConnectorPath, CornerStyle, ElementStyle, FontFamily,
    StrokePattern, StylePatch,
};
