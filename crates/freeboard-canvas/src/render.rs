//! Render contract.
//!
//! The canvas never paints. It hands the backend one [`RenderPrimitive`] per
//! element in z-order and asks the backend, through [`RenderBackend`], which
//! element sits under the pointer and where an interactive transform left a
//! node.

use std::collections::HashMap;

use lyon::math::{point, vector, Angle, Box2D, Transform};
use lyon::path::builder::BorderRadii;
use lyon::path::{Path, Polygon, Winding};
use serde::{Deserialize, Serialize};

use freeboard_core::constants::{ARROWHEAD_SPREAD_DEG, DOT_HEAD_RADIUS_FACTOR};
use freeboard_core::{ArrowHead, ConnectorPath, CornerStyle, ElementId, ElementStyle};

use crate::binding::resolve_arrow;
use crate::geometry::{arrowhead_barbs, distance_to_polyline, ArrowPath};
use crate::model::{Bounds, Element, ElementKind, ElementType, Point};
use crate::store::ElementStore;

/// Corner radius of round-cornered shapes relative to their shorter side.
const ROUND_CORNER_RATIO: f64 = 0.25;

/// Where an interactive transform left a node, as reported by the backend.
///
/// `x`/`y` use the same anchor convention as the element: the drawing origin
/// for shapes, an offset from the origin for point-based kinds. `scale_x` and
/// `scale_y` are the transient scale the user dragged to, sign included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl NodeTransform {
    /// The untouched node of `element`: its anchor, rotation and unit scale.
    /// Point-based kinds rest at a zero offset.
    pub fn at_rest(element: &Element) -> Self {
        let (x, y) = if element.is_point_based() {
            (0.0, 0.0)
        } else {
            (element.x, element.y)
        };
        Self {
            x,
            y,
            rotation: element.rotation,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Capability the canvas needs from whatever draws it.
pub trait RenderBackend {
    /// Topmost element under `point`.
    fn hit_test(&self, point: Point) -> Option<ElementId>;

    /// Resolved transform of the node drawn for `id`, if the node exists.
    fn node_transform(&self, id: ElementId) -> Option<NodeTransform>;

    /// Rebases the node drawn for `element` onto its committed fields once
    /// the node's transform has been baked in: anchor and rotation from the
    /// element, scale back to 1.
    fn reset_node(&mut self, element: &Element);

    /// Called with the current store before the canvas queries the backend.
    /// Nodes whose element changed since the last sync are rebased.
    fn sync(&mut self, _store: &ElementStore) {}
}

/// Kind-specific paint geometry, in canvas space before rotation and scale.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveGeometry {
    Rect { frame: Bounds },
    Ellipse { frame: Bounds },
    Diamond { frame: Bounds },
    Polyline { points: Vec<Point> },
    Arrow {
        path: ArrowPath,
        curved: bool,
        start_head: ArrowHead,
        end_head: ArrowHead,
    },
    Text { frame: Bounds, text: String },
    Image { frame: Bounds, source: String },
}

/// Flat paint record for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPrimitive {
    pub id: ElementId,
    pub element_type: ElementType,
    pub geometry: PrimitiveGeometry,
    pub anchor: Point,
    /// Rotation and scale pivot.
    pub pivot: Point,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub style: ElementStyle,
}

impl RenderPrimitive {
    /// Builds the primitive for `element`, resolving arrows against `store`.
    pub fn from_element(store: &ElementStore, element: &Element) -> Self {
        let frame = Bounds::new(
            element.x,
            element.y,
            element.x + element.width,
            element.y + element.height,
        );
        let mut primitive = Self {
            id: element.id,
            element_type: element.element_type(),
            geometry: PrimitiveGeometry::Rect { frame },
            anchor: Point::new(element.x, element.y),
            pivot: element.visual_center(),
            rotation: element.rotation,
            scale_x: element.scale_x,
            scale_y: element.scale_y,
            style: element.style.clone(),
        };

        primitive.geometry = match &element.kind {
            ElementKind::Rectangle => PrimitiveGeometry::Rect { frame },
            ElementKind::Ellipse => PrimitiveGeometry::Ellipse { frame },
            ElementKind::Diamond => PrimitiveGeometry::Diamond { frame },
            ElementKind::Line { points } | ElementKind::Freehand { points } => {
                PrimitiveGeometry::Polyline {
                    points: points.clone(),
                }
            }
            ElementKind::Arrow { arrow, points, .. } => {
                // Resolved arrow paths are already in canvas space.
                let path = match resolve_arrow(store, element) {
                    Some(resolved) => resolved.path,
                    None => points.iter().copied().collect(),
                };
                primitive.rotation = 0.0;
                primitive.scale_x = 1.0;
                primitive.scale_y = 1.0;
                PrimitiveGeometry::Arrow {
                    curved: arrow.path == ConnectorPath::Curved,
                    start_head: arrow.start_head,
                    end_head: arrow.end_head,
                    path,
                }
            }
            ElementKind::Text { text } => PrimitiveGeometry::Text {
                frame,
                text: text.clone(),
            },
            ElementKind::Image { source } => PrimitiveGeometry::Image {
                frame,
                source: source.clone(),
            },
        };
        primitive
    }

    /// Canvas-space outline with rotation and scale applied about the pivot.
    pub fn outline(&self, arrowhead_length: f64) -> Path {
        let mut builder = Path::builder();
        match &self.geometry {
            PrimitiveGeometry::Rect { frame }
            | PrimitiveGeometry::Text { frame, .. }
            | PrimitiveGeometry::Image { frame, .. } => {
                let rect = to_box(frame);
                let radius = frame.width().min(frame.height()) * ROUND_CORNER_RATIO;
                if self.style.corner_style == CornerStyle::Round
                    && self.element_type == ElementType::Rectangle
                    && radius > 0.0
                {
                    builder.add_rounded_rectangle(
                        &rect,
                        &BorderRadii::new(radius as f32),
                        Winding::Positive,
                    );
                } else {
                    builder.add_rectangle(&rect, Winding::Positive);
                }
            }
            PrimitiveGeometry::Ellipse { frame } => {
                let center = frame.center();
                builder.add_ellipse(
                    to_lyon(center),
                    vector((frame.width() / 2.0) as f32, (frame.height() / 2.0) as f32),
                    Angle::zero(),
                    Winding::Positive,
                );
            }
            PrimitiveGeometry::Diamond { frame } => {
                let c = frame.center();
                let vertices = [
                    point(c.x as f32, frame.min_y as f32),
                    point(frame.max_x as f32, c.y as f32),
                    point(c.x as f32, frame.max_y as f32),
                    point(frame.min_x as f32, c.y as f32),
                ];
                builder.add_polygon(Polygon {
                    points: &vertices,
                    closed: true,
                });
            }
            PrimitiveGeometry::Polyline { points } => {
                if let Some((first, rest)) = points.split_first() {
                    builder.begin(to_lyon(*first));
                    for p in rest {
                        builder.line_to(to_lyon(*p));
                    }
                    builder.end(false);
                }
            }
            PrimitiveGeometry::Arrow {
                path,
                curved,
                start_head,
                end_head,
            } => {
                if let Some((first, rest)) = path.split_first() {
                    builder.begin(to_lyon(*first));
                    match (*curved, rest) {
                        (true, [control, end]) => {
                            builder.quadratic_bezier_to(to_lyon(*control), to_lyon(*end));
                        }
                        _ => {
                            for p in rest {
                                builder.line_to(to_lyon(*p));
                            }
                        }
                    }
                    builder.end(false);
                }

                let n = path.len();
                if n >= 2 {
                    let heads = [
                        (*start_head, path[0], path[1]),
                        (*end_head, path[n - 1], path[n - 2]),
                    ];
                    for (head, tip, from) in heads {
                        match head {
                            ArrowHead::None => {}
                            ArrowHead::Arrow => {
                                if let Some((a, b)) =
                                    arrowhead_barbs(tip, from, arrowhead_length, ARROWHEAD_SPREAD_DEG)
                                {
                                    builder.begin(to_lyon(a));
                                    builder.line_to(to_lyon(tip));
                                    builder.line_to(to_lyon(b));
                                    builder.end(false);
                                }
                            }
                            ArrowHead::Dot => {
                                let radius =
                                    (self.style.stroke_width.max(1.0) * DOT_HEAD_RADIUS_FACTOR) as f32;
                                builder.add_circle(to_lyon(tip), radius, Winding::Positive);
                            }
                        }
                    }
                }
            }
        }

        let path = builder.build();
        if self.rotation == 0.0 && self.scale_x == 1.0 && self.scale_y == 1.0 {
            return path;
        }
        let transform = Transform::translation(-self.pivot.x as f32, -self.pivot.y as f32)
            .then_scale(self.scale_x as f32, self.scale_y as f32)
            .then_rotate(Angle::radians(self.rotation.to_radians() as f32))
            .then_translate(vector(self.pivot.x as f32, self.pivot.y as f32));
        path.transformed(&transform)
    }
}

fn to_lyon(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

fn to_box(frame: &Bounds) -> Box2D {
    Box2D::new(
        point(frame.min_x as f32, frame.min_y as f32),
        point(frame.max_x as f32, frame.max_y as f32),
    )
}

/// One primitive per element, bottom to top.
pub fn build_primitives(store: &ElementStore) -> Vec<RenderPrimitive> {
    store
        .iter()
        .map(|element| RenderPrimitive::from_element(store, element))
        .collect()
}

/// In-process backend for headless hosts.
///
/// Hit tests the synced store geometrically (arrows against their resolved
/// path) and keeps the node transforms a host pushes while the user drags
/// transform handles.
#[derive(Debug, Clone, Default)]
pub struct SceneBackend {
    store: ElementStore,
    transforms: HashMap<ElementId, NodeTransform>,
    tolerance: f64,
}

impl SceneBackend {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Records where the host's node for `id` ended up.
    pub fn set_node_transform(&mut self, id: ElementId, transform: NodeTransform) {
        self.transforms.insert(id, transform);
    }

    pub fn clear_node_transforms(&mut self) {
        self.transforms.clear();
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl RenderBackend for SceneBackend {
    fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.store
            .iter()
            .rev()
            .find(|element| match resolve_arrow(&self.store, element) {
                Some(resolved) => {
                    distance_to_polyline(point, &resolved.path)
                        <= self.tolerance + element.style.stroke_width / 2.0
                }
                None => element.contains_point(point, self.tolerance),
            })
            .map(|element| element.id)
    }

    fn node_transform(&self, id: ElementId) -> Option<NodeTransform> {
        self.transforms.get(&id).copied()
    }

    fn reset_node(&mut self, element: &Element) {
        if let Some(transform) = self.transforms.get_mut(&element.id) {
            *transform = NodeTransform::at_rest(element);
        }
    }

    fn sync(&mut self, store: &ElementStore) {
        let previous = std::mem::replace(&mut self.store, store.clone());
        self.transforms.retain(|id, transform| match store.find_by_id(*id) {
            Some(element) => {
                if previous.find_by_id(*id) != Some(element) {
                    *transform = NodeTransform::at_rest(element);
                }
                true
            }
            None => false,
        });
    }
}
