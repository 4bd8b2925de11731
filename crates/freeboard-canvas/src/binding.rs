//! Binding resolver.
//!
//! Arrows store weak references to the shapes their ends are glued to. The
//! painted endpoints are recomputed from the current store on every render
//! pass and never written back, so moving, rotating or flipping a target
//! drags the arrow end along without any bookkeeping.

use freeboard_core::ElementId;

use crate::geometry::{boundary_intersection, rotate_point, synthesize_arrow_path, ArrowPath};
use crate::model::{Element, ElementKind, Point};
use crate::store::ElementStore;

/// Painted geometry of an arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArrow {
    pub start: Point,
    pub end: Point,
    pub path: ArrowPath,
}

/// Point where the ray from `target`'s visual center towards `from` leaves
/// the target's outline, rotation and mirroring included.
pub fn resolve_endpoint(target: &Element, from: Point) -> Point {
    let center = target.visual_center();
    let (half_width, half_height) = target.half_extents();

    let local_from = rotate_point(from, center, -target.rotation);
    let direction = local_from - center;
    let t = boundary_intersection(
        target.element_type().boundary_shape(),
        half_width,
        half_height,
        direction,
    );
    rotate_point(center + direction * t, center, target.rotation)
}

/// Looks up a bindable target, treating dangling ids and point-based
/// elements as absent.
fn bound_target(store: &ElementStore, binding: Option<ElementId>) -> Option<&Element> {
    binding
        .and_then(|id| store.find_by_id(id))
        .filter(|target| target.element_type().is_bindable())
}

/// Resolves the painted endpoints and path of `arrow`.
///
/// The start is resolved first, aiming at the literal end point, then the
/// end is resolved aiming at the new start. Returns `None` for anything that
/// is not an arrow with at least one point.
pub fn resolve_arrow(store: &ElementStore, arrow: &Element) -> Option<ResolvedArrow> {
    let ElementKind::Arrow {
        points,
        arrow: style,
        start_binding,
        end_binding,
    } = &arrow.kind
    else {
        return None;
    };

    let literal_start = arrow.to_canvas(*points.first()?);
    let literal_end = arrow.to_canvas(*points.last()?);

    let start = bound_target(store, *start_binding)
        .map(|target| resolve_endpoint(target, literal_end))
        .unwrap_or(literal_start);
    let end = bound_target(store, *end_binding)
        .map(|target| resolve_endpoint(target, start))
        .unwrap_or(literal_end);

    Some(ResolvedArrow {
        start,
        end,
        path: synthesize_arrow_path(start, end, style.path),
    })
}

/// Topmost bindable element under `point`, skipping `exclude`.
pub fn find_binding_target(
    store: &ElementStore,
    point: Point,
    tolerance: f64,
    exclude: Option<ElementId>,
) -> Option<ElementId> {
    store
        .iter()
        .rev()
        .filter(|e| Some(e.id) != exclude)
        .filter(|e| e.element_type().is_bindable())
        .find(|e| e.contains_point(point, tolerance))
        .map(|e| e.id)
}
