//! Style vocabulary shared by elements, the style panel and configuration.
//!
//! Every named option parses from and displays as its lowercase name so that
//! hosts which only deal in strings (a properties panel, a config file) can
//! round-trip values without knowing the enums.

use crate::error::{Error, Result, StyleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x1e, 0x1e, 0x1e);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        let invalid = || StyleError::InvalidColor {
            value: s.to_string(),
        };
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Dash pattern of an element's stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokePattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokePattern {
    /// Dash array in multiples of the stroke width, empty for solid strokes.
    pub fn dash_array(&self, stroke_width: f64) -> Vec<f64> {
        let w = stroke_width.max(1.0);
        match self {
            Self::Solid => Vec::new(),
            Self::Dashed => vec![4.0 * w, 4.0 * w],
            Self::Dotted => vec![w, 2.0 * w],
        }
    }
}

impl fmt::Display for StrokePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dashed => write!(f, "dashed"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

impl FromStr for StrokePattern {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(StyleError::UnknownOption {
                attribute: "stroke pattern",
                value: s.to_string(),
            }),
        }
    }
}

/// Corner treatment for rectangles and diamonds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    #[default]
    Sharp,
    Round,
}

impl fmt::Display for CornerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sharp => write!(f, "sharp"),
            Self::Round => write!(f, "round"),
        }
    }
}

impl FromStr for CornerStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharp" => Ok(Self::Sharp),
            "round" | "rounded" => Ok(Self::Round),
            _ => Err(StyleError::UnknownOption {
                attribute: "corner style",
                value: s.to_string(),
            }),
        }
    }
}

/// Font family for text-bearing elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Hand,
    Sans,
    Serif,
    Mono,
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hand => write!(f, "hand"),
            Self::Sans => write!(f, "sans"),
            Self::Serif => write!(f, "serif"),
            Self::Mono => write!(f, "mono"),
        }
    }
}

impl FromStr for FontFamily {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hand" | "handwritten" => Ok(Self::Hand),
            "sans" | "sans-serif" => Ok(Self::Sans),
            "serif" => Ok(Self::Serif),
            "mono" | "monospace" => Ok(Self::Mono),
            _ => Err(StyleError::UnknownOption {
                attribute: "font family",
                value: s.to_string(),
            }),
        }
    }
}

/// Decoration drawn at an arrow end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowHead {
    #[default]
    None,
    Arrow,
    Dot,
}

impl fmt::Display for ArrowHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Arrow => write!(f, "arrow"),
            Self::Dot => write!(f, "dot"),
        }
    }
}

impl FromStr for ArrowHead {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "arrow" | "arrowhead" => Ok(Self::Arrow),
            "dot" => Ok(Self::Dot),
            _ => Err(StyleError::UnknownOption {
                attribute: "arrow head",
                value: s.to_string(),
            }),
        }
    }
}

/// Route taken by a connector between its two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorPath {
    #[default]
    Straight,
    Elbow,
    Curved,
}

impl fmt::Display for ConnectorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => write!(f, "straight"),
            Self::Elbow => write!(f, "elbow"),
            Self::Curved => write!(f, "curved"),
        }
    }
}

impl FromStr for ConnectorPath {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "straight" => Ok(Self::Straight),
            "elbow" => Ok(Self::Elbow),
            "curved" | "curve" => Ok(Self::Curved),
            _ => Err(StyleError::UnknownOption {
                attribute: "connector path",
                value: s.to_string(),
            }),
        }
    }
}

/// Visual attributes shared by every element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
    pub stroke_color: Color,
    pub fill_color: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
    pub stroke_pattern: StrokePattern,
    pub corner_style: CornerStyle,
    /// Sloppiness of the hand-drawn look, 0 draws clean geometry.
    pub roughness: f64,
    pub font_family: FontFamily,
    pub font_size: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: None,
            stroke_width: 2.0,
            opacity: 1.0,
            stroke_pattern: StrokePattern::Solid,
            corner_style: CornerStyle::Sharp,
            roughness: 1.0,
            font_family: FontFamily::Hand,
            font_size: 20.0,
        }
    }
}

impl ElementStyle {
    /// Applies every field present in `patch`, clamping numeric values into
    /// their valid ranges.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(color) = patch.stroke_color {
            self.stroke_color = color;
        }
        if let Some(fill) = patch.fill_color {
            self.fill_color = fill;
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = width.max(0.0);
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(pattern) = patch.stroke_pattern {
            self.stroke_pattern = pattern;
        }
        if let Some(corners) = patch.corner_style {
            self.corner_style = corners;
        }
        if let Some(roughness) = patch.roughness {
            self.roughness = roughness.max(0.0);
        }
        if let Some(family) = patch.font_family {
            self.font_family = family;
        }
        if let Some(size) = patch.font_size {
            if size > 0.0 {
                self.font_size = size;
            }
        }
    }

    /// Checks that numeric attributes are inside their valid ranges.
    pub fn validate(&self) -> std::result::Result<(), StyleError> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(StyleError::OutOfRange {
                attribute: "opacity",
                value: self.opacity,
            });
        }
        if !(self.stroke_width >= 0.0) {
            return Err(StyleError::OutOfRange {
                attribute: "stroke width",
                value: self.stroke_width,
            });
        }
        if !(self.roughness >= 0.0) {
            return Err(StyleError::OutOfRange {
                attribute: "roughness",
                value: self.roughness,
            });
        }
        if !(self.font_size > 0.0) {
            return Err(StyleError::OutOfRange {
                attribute: "font size",
                value: self.font_size,
            });
        }
        Ok(())
    }
}

/// Arrow-only attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    pub start_head: ArrowHead,
    pub end_head: ArrowHead,
    pub path: ConnectorPath,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            start_head: ArrowHead::None,
            end_head: ArrowHead::Arrow,
            path: ConnectorPath::Straight,
        }
    }
}

impl ArrowStyle {
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(head) = patch.start_head {
            self.start_head = head;
        }
        if let Some(head) = patch.end_head {
            self.end_head = head;
        }
        if let Some(path) = patch.connector_path {
            self.path = path;
        }
    }
}

/// A partial style update as emitted by the style panel.
///
/// `fill_color` is doubly optional: `Some(None)` clears the fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Option<Color>>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub stroke_pattern: Option<StrokePattern>,
    pub corner_style: Option<CornerStyle>,
    pub roughness: Option<f64>,
    pub font_family: Option<FontFamily>,
    pub font_size: Option<f64>,
    pub start_head: Option<ArrowHead>,
    pub end_head: Option<ArrowHead>,
    pub connector_path: Option<ConnectorPath>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true when the patch touches an arrow-only attribute.
    pub fn touches_arrow(&self) -> bool {
        self.start_head.is_some() || self.end_head.is_some() || self.connector_path.is_some()
    }

    /// Sets one option by its panel name, parsing the value.
    ///
    /// Keys are the snake_case attribute names (`stroke_color`,
    /// `connector_path`, ...). An empty or `none` fill clears the fill.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let number = |attribute: &'static str| {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    Error::from(StyleError::UnknownOption {
                        attribute,
                        value: value.to_string(),
                    })
                })
        };

        match key {
            "stroke_color" => self.stroke_color = Some(value.parse()?),
            "fill_color" => {
                let trimmed = value.trim();
                self.fill_color = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
                    Some(None)
                } else {
                    Some(Some(trimmed.parse()?))
                };
            }
            "stroke_width" => self.stroke_width = Some(number("stroke width")?),
            "opacity" => {
                let opacity = number("opacity")?;
                if !(0.0..=1.0).contains(&opacity) {
                    return Err(StyleError::OutOfRange {
                        attribute: "opacity",
                        value: opacity,
                    }
                    .into());
                }
                self.opacity = Some(opacity);
            }
            "stroke_pattern" => self.stroke_pattern = Some(value.parse()?),
            "corner_style" => self.corner_style = Some(value.parse()?),
            "roughness" => self.roughness = Some(number("roughness")?),
            "font_family" => self.font_family = Some(value.parse()?),
            "font_size" => self.font_size = Some(number("font size")?),
            "start_head" => self.start_head = Some(value.parse()?),
            "end_head" => self.end_head = Some(value.parse()?),
            "connector_path" => self.connector_path = Some(value.parse()?),
            other => {
                return Err(StyleError::UnknownOption {
                    attribute: "style option",
                    value: other.to_string(),
                }
                .into())
            }
        }
        Ok(())
    }

    /// Builds a patch from `(key, value)` pairs, stopping at the first bad one.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut patch = Self::default();
        for (key, value) in pairs {
            patch.set(key, value)?;
        }
        Ok(patch)
    }
}
