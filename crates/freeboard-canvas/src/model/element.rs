use serde::{Deserialize, Serialize};
use std::fmt;

use freeboard_core::{ArrowStyle, ElementId, ElementStyle};

use super::{Bounds, Point};
use crate::geometry::{distance_to_polyline, rotate_point, BoundaryShape};

/// Average glyph advance relative to the font size, used to size text boxes.
const TEXT_ADVANCE_RATIO: f64 = 0.6;
/// Line height relative to the font size.
const TEXT_LINE_HEIGHT: f64 = 1.25;

/// Kind tag without payload, handy for matching and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Rectangle,
    Diamond,
    Ellipse,
    Arrow,
    Line,
    Freehand,
    Text,
    Image,
}

impl ElementType {
    /// Arrows, lines and freehand strokes keep absolute coordinates in their
    /// point list and their anchor pinned at the origin.
    pub fn is_point_based(&self) -> bool {
        matches!(self, Self::Arrow | Self::Line | Self::Freehand)
    }

    /// Whether an arrow endpoint may glue to elements of this type.
    pub fn is_bindable(&self) -> bool {
        !self.is_point_based()
    }

    pub fn boundary_shape(&self) -> BoundaryShape {
        match self {
            Self::Ellipse => BoundaryShape::Ellipse,
            Self::Diamond => BoundaryShape::Diamond,
            _ => BoundaryShape::Rectangle,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rectangle => "rectangle",
            Self::Diamond => "diamond",
            Self::Ellipse => "ellipse",
            Self::Arrow => "arrow",
            Self::Line => "line",
            Self::Freehand => "freehand",
            Self::Text => "text",
            Self::Image => "image",
        };
        write!(f, "{name}")
    }
}

/// Kind-specific payload of an [`Element`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Diamond,
    Ellipse,
    Arrow {
        points: Vec<Point>,
        arrow: ArrowStyle,
        /// Weak reference, resolved through the store when painting.
        start_binding: Option<ElementId>,
        end_binding: Option<ElementId>,
    },
    Line {
        points: Vec<Point>,
    },
    Freehand {
        points: Vec<Point>,
    },
    Text {
        text: String,
    },
    Image {
        /// Handle supplied by the host once the image has been decoded.
        source: String,
    },
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Rectangle => ElementType::Rectangle,
            Self::Diamond => ElementType::Diamond,
            Self::Ellipse => ElementType::Ellipse,
            Self::Arrow { .. } => ElementType::Arrow,
            Self::Line { .. } => ElementType::Line,
            Self::Freehand { .. } => ElementType::Freehand,
            Self::Text { .. } => ElementType::Text,
            Self::Image { .. } => ElementType::Image,
        }
    }
}

/// A single canvas element.
///
/// For rectangles, diamonds, ellipses, text and images `(x, y)` is the
/// drawing origin and `width`/`height` may be negative while a draw is in
/// progress. Point-based kinds keep `(x, y)` at the origin and carry absolute
/// coordinates in their point list. Rotation (degrees) and the ±1 scale signs
/// pivot on [`Element::visual_center`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    pub style: ElementStyle,
    pub kind: ElementKind,
}

impl Element {
    /// Creates an element with placeholder zero geometry.
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            style: ElementStyle::default(),
            kind,
        }
    }

    pub fn rectangle(id: ElementId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, ElementKind::Rectangle).with_frame(x, y, width, height)
    }

    pub fn diamond(id: ElementId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, ElementKind::Diamond).with_frame(x, y, width, height)
    }

    pub fn ellipse(id: ElementId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, ElementKind::Ellipse).with_frame(x, y, width, height)
    }

    pub fn arrow(id: ElementId, start: Point, end: Point) -> Self {
        Self::new(
            id,
            ElementKind::Arrow {
                points: vec![start, end],
                arrow: ArrowStyle::default(),
                start_binding: None,
                end_binding: None,
            },
        )
    }

    pub fn line(id: ElementId, start: Point, end: Point) -> Self {
        Self::new(
            id,
            ElementKind::Line {
                points: vec![start, end],
            },
        )
    }

    pub fn freehand(id: ElementId, points: Vec<Point>) -> Self {
        Self::new(id, ElementKind::Freehand { points })
    }

    /// Text box sized from the character count and the style's font size.
    pub fn text(id: ElementId, x: f64, y: f64, text: impl Into<String>, style: ElementStyle) -> Self {
        let text = text.into();
        let lines = text.lines().count().max(1) as f64;
        let columns = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let width = columns * style.font_size * TEXT_ADVANCE_RATIO;
        let height = lines * style.font_size * TEXT_LINE_HEIGHT;
        Self::new(id, ElementKind::Text { text })
            .with_frame(x, y, width, height)
            .with_style(style)
    }

    pub fn image(
        id: ElementId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        source: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            ElementKind::Image {
                source: source.into(),
            },
        )
        .with_frame(x, y, width, height)
    }

    pub fn with_frame(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_arrow_style(mut self, style: ArrowStyle) -> Self {
        if let ElementKind::Arrow { arrow, .. } = &mut self.kind {
            *arrow = style;
        }
        self
    }

    pub fn with_bindings(mut self, start: Option<ElementId>, end: Option<ElementId>) -> Self {
        if let ElementKind::Arrow {
            start_binding,
            end_binding,
            ..
        } = &mut self.kind
        {
            *start_binding = start;
            *end_binding = end;
        }
        self
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn is_point_based(&self) -> bool {
        self.element_type().is_point_based()
    }

    pub fn points(&self) -> Option<&[Point]> {
        match &self.kind {
            ElementKind::Arrow { points, .. }
            | ElementKind::Line { points }
            | ElementKind::Freehand { points } => Some(points),
            _ => None,
        }
    }

    pub fn points_mut(&mut self) -> Option<&mut Vec<Point>> {
        match &mut self.kind {
            ElementKind::Arrow { points, .. }
            | ElementKind::Line { points }
            | ElementKind::Freehand { points } => Some(points),
            _ => None,
        }
    }

    /// `(start_binding, end_binding)` for arrows, `None` otherwise.
    pub fn bindings(&self) -> Option<(Option<ElementId>, Option<ElementId>)> {
        match &self.kind {
            ElementKind::Arrow {
                start_binding,
                end_binding,
                ..
            } => Some((*start_binding, *end_binding)),
            _ => None,
        }
    }

    pub fn arrow_style(&self) -> Option<&ArrowStyle> {
        match &self.kind {
            ElementKind::Arrow { arrow, .. } => Some(arrow),
            _ => None,
        }
    }

    /// Pivot for rotation and scale.
    pub fn visual_center(&self) -> Point {
        match self.points() {
            Some(points) => Bounds::from_points(points)
                .map(|b| b.center())
                .unwrap_or(Point::new(self.x, self.y)),
            None => Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0),
        }
    }

    /// Half width and half height including scale magnitude.
    pub fn half_extents(&self) -> (f64, f64) {
        (
            (self.width * self.scale_x).abs() / 2.0,
            (self.height * self.scale_y).abs() / 2.0,
        )
    }

    /// Maps a point from the element's unrotated, unmirrored frame to canvas
    /// space.
    pub fn to_canvas(&self, p: Point) -> Point {
        let center = self.visual_center();
        let scaled = Point::new(
            center.x + (p.x - center.x) * self.scale_x,
            center.y + (p.y - center.y) * self.scale_y,
        );
        rotate_point(scaled, center, self.rotation)
    }

    /// Inverse of [`Element::to_canvas`].
    pub fn to_local(&self, p: Point) -> Point {
        let center = self.visual_center();
        let unrotated = rotate_point(p, center, -self.rotation);
        let sx = if self.scale_x == 0.0 { 1.0 } else { self.scale_x };
        let sy = if self.scale_y == 0.0 { 1.0 } else { self.scale_y };
        Point::new(
            center.x + (unrotated.x - center.x) / sx,
            center.y + (unrotated.y - center.y) / sy,
        )
    }

    /// Axis-aligned bounds in canvas space, rotation included.
    pub fn bounds(&self) -> Bounds {
        if let Some(points) = self.points() {
            let mapped: Vec<Point> = points.iter().map(|p| self.to_canvas(*p)).collect();
            return Bounds::from_points(&mapped)
                .unwrap_or(Bounds::new(self.x, self.y, self.x, self.y));
        }

        let center = self.visual_center();
        let (hw, hh) = (self.width.abs() / 2.0, self.height.abs() / 2.0);
        match self.element_type() {
            ElementType::Ellipse => {
                let (sin, cos) = self.rotation.to_radians().sin_cos();
                let ex = ((hw * cos).powi(2) + (hh * sin).powi(2)).sqrt();
                let ey = ((hw * sin).powi(2) + (hh * cos).powi(2)).sqrt();
                Bounds::new(center.x - ex, center.y - ey, center.x + ex, center.y + ey)
            }
            ElementType::Diamond => {
                let vertices = [
                    Point::new(center.x, center.y - hh),
                    Point::new(center.x + hw, center.y),
                    Point::new(center.x, center.y + hh),
                    Point::new(center.x - hw, center.y),
                ]
                .map(|p| self.to_canvas(p));
                Bounds::from_points(&vertices).unwrap_or(Bounds::from_corners(center, center))
            }
            _ => {
                let corners = [
                    Point::new(center.x - hw, center.y - hh),
                    Point::new(center.x + hw, center.y - hh),
                    Point::new(center.x + hw, center.y + hh),
                    Point::new(center.x - hw, center.y + hh),
                ]
                .map(|p| self.to_canvas(p));
                Bounds::from_points(&corners).unwrap_or(Bounds::from_corners(center, center))
            }
        }
    }

    /// Hit test against the element's own stored geometry.
    ///
    /// Filled kinds test their interior, point-based kinds test the stroke
    /// within `tolerance` plus half the stroke width.
    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let local = self.to_local(p);
        if let Some(points) = self.points() {
            return distance_to_polyline(local, points) <= tolerance + self.style.stroke_width / 2.0;
        }

        let center = self.visual_center();
        let dx = (local.x - center.x).abs();
        let dy = (local.y - center.y).abs();
        let hw = self.width.abs() / 2.0 + tolerance;
        let hh = self.height.abs() / 2.0 + tolerance;
        match self.element_type().boundary_shape() {
            BoundaryShape::Rectangle => dx <= hw && dy <= hh,
            BoundaryShape::Ellipse => (dx / hw).powi(2) + (dy / hh).powi(2) <= 1.0,
            BoundaryShape::Diamond => dx / hw + dy / hh <= 1.0,
        }
    }

    /// Moves the element. Point-based kinds move their points and keep the
    /// anchor at the origin.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self.points_mut() {
            Some(points) => {
                for p in points.iter_mut() {
                    p.x += dx;
                    p.y += dy;
                }
                self.x = 0.0;
                self.y = 0.0;
            }
            None => {
                self.x += dx;
                self.y += dy;
            }
        }
    }

    /// Folds negative width or height into the anchor so the frame is
    /// described by a top-left origin and non-negative size.
    pub fn normalize(&mut self) {
        if self.is_point_based() {
            return;
        }
        if self.width < 0.0 {
            self.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.y += self.height;
            self.height = -self.height;
        }
    }

    /// Whether a freshly drawn element is too small to keep.
    pub fn is_degenerate(&self, min_size: f64) -> bool {
        match &self.kind {
            ElementKind::Arrow { points, .. } | ElementKind::Line { points } => {
                match (points.first(), points.last()) {
                    (Some(a), Some(b)) => a.distance_to(b) < min_size,
                    _ => true,
                }
            }
            ElementKind::Freehand { points } => points.len() < 2,
            _ => self.width.abs() < min_size && self.height.abs() < min_size,
        }
    }
}
