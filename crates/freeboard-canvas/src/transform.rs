//! Transform normalizer.
//!
//! Turns the end state of an interactive transform, as reported by the
//! backend, into canonical element fields: non-negative width and height,
//! mirroring carried only by the sign of the scale, and point-based kinds
//! with their anchor back at the origin.

use freeboard_core::ElementId;
use tracing::debug;

use crate::model::{Element, Point};
use crate::render::{NodeTransform, RenderBackend};
use crate::selection::Selection;
use crate::store::ElementStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    Horizontal,
    Vertical,
}

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Folds a reported node transform into `element`.
pub fn apply_node_transform(element: &mut Element, node: &NodeTransform) {
    let magnitude_x = node.scale_x.abs();
    let magnitude_y = node.scale_y.abs();

    if element.is_point_based() {
        element.translate(node.x, node.y);
        if magnitude_x != 1.0 || magnitude_y != 1.0 {
            let center = element.visual_center();
            if let Some(points) = element.points_mut() {
                for p in points.iter_mut() {
                    *p = Point::new(
                        center.x + (p.x - center.x) * magnitude_x,
                        center.y + (p.y - center.y) * magnitude_y,
                    );
                }
            }
        }
    } else {
        element.x = node.x;
        element.y = node.y;
        element.width *= magnitude_x;
        element.height *= magnitude_y;
        element.normalize();
    }

    element.rotation = node.rotation;
    element.scale_x *= sign(node.scale_x);
    element.scale_y *= sign(node.scale_y);
}

/// Commits the backend's node transforms for every selected element and
/// rebases each node onto the committed element, so a later commit of the
/// same node changes nothing. Returns how many were committed.
pub fn commit_transform<B>(
    store: &mut ElementStore,
    selection: &Selection,
    backend: &mut B,
) -> usize
where
    B: RenderBackend + ?Sized,
{
    let mut committed = 0;
    for id in selection.ordered_ids(store) {
        let Some(node) = backend.node_transform(id) else {
            continue;
        };
        store.update(id, |element| apply_node_transform(element, &node));
        if let Some(element) = store.find_by_id(id) {
            backend.reset_node(element);
        }
        committed += 1;
    }
    debug!(committed, "transform committed");
    committed
}

/// Mirrors every selected element by toggling the sign of its scale.
pub fn flip(store: &mut ElementStore, selection: &Selection, axis: FlipAxis) -> usize {
    store.update_where(
        |element| selection.contains(element.id),
        |element| match axis {
            FlipAxis::Horizontal => element.scale_x = -element.scale_x,
            FlipAxis::Vertical => element.scale_y = -element.scale_y,
        },
    )
}

/// Moves the selection rigidly after `dragged` was dropped at `reported`.
///
/// The offset between the reported position and the dragged element's
/// stored anchor is applied to the dragged element and to every selected
/// element. Returns `false` when nothing moved.
pub fn drag_move(
    store: &mut ElementStore,
    selection: &Selection,
    dragged: ElementId,
    reported: Point,
) -> bool {
    let Some(element) = store.find_by_id(dragged) else {
        return false;
    };
    let dx = reported.x - element.x;
    let dy = reported.y - element.y;
    if dx == 0.0 && dy == 0.0 {
        return false;
    }
    store.update_where(
        |element| element.id == dragged || selection.contains(element.id),
        |element| element.translate(dx, dy),
    ) > 0
}
