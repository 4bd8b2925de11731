//! Pointer handling: drawing, selection, dragging, marquee and eraser.

use super::{Editor, Interaction, Tool};
use crate::binding::find_binding_target;
use crate::model::{Bounds, Element, ElementKind, Point};
use crate::render::RenderBackend;
use crate::transform::{commit_transform, drag_move};
use freeboard_core::{ElementId, Modifiers};
use tracing::{debug, trace};

impl Editor {
    /// Handles pointer down at `point` (canvas space).
    pub fn pointer_down<B>(&mut self, point: Point, modifiers: Modifiers, backend: &mut B)
    where
        B: RenderBackend + ?Sized,
    {
        backend.sync(&self.store);
        match self.tool {
            Tool::Select => self.begin_select(point, modifiers, backend),
            Tool::Eraser => {
                self.interaction = Interaction::Erasing;
                self.erase_at(point, backend);
            }
            tool => self.begin_draw(tool, point),
        }
    }

    /// Handles pointer movement while a button is held.
    pub fn pointer_move<B>(&mut self, point: Point, modifiers: Modifiers, backend: &mut B)
    where
        B: RenderBackend + ?Sized,
    {
        trace!(x = point.x, y = point.y, "pointer move");
        match self.interaction.clone() {
            Interaction::Idle => {}
            Interaction::Drawing { id, origin } => self.update_draft(id, origin, point, modifiers),
            Interaction::Dragging { id, last } => {
                self.drag_by(id, point - last);
                self.interaction = Interaction::Dragging { id, last: point };
            }
            Interaction::Marquee {
                origin, additive, ..
            } => {
                self.interaction = Interaction::Marquee {
                    origin,
                    current: point,
                    additive,
                }
            }
            Interaction::Erasing => {
                backend.sync(&self.store);
                self.erase_at(point, backend);
            }
        }
    }

    /// Handles pointer up. This is an interaction boundary: returns whether a
    /// history entry was recorded.
    pub fn pointer_up<B>(&mut self, point: Point, modifiers: Modifiers, backend: &mut B) -> bool
    where
        B: RenderBackend + ?Sized,
    {
        let interaction = std::mem::take(&mut self.interaction);
        let committed = match interaction {
            Interaction::Idle => false,
            Interaction::Drawing { id, origin } => {
                self.update_draft(id, origin, point, modifiers);
                self.finish_draw(id, point);
                self.commit()
            }
            Interaction::Dragging { id, last } => {
                self.drag_by(id, point - last);
                self.commit()
            }
            Interaction::Marquee {
                origin, additive, ..
            } => {
                let rect = Bounds::from_corners(origin, point);
                let tolerance = self.settings.hit_tolerance;
                // Within the hit tolerance this was a click on empty space.
                if rect.width() > tolerance || rect.height() > tolerance {
                    let hits = self.selection.select_in_rect(&self.store, rect, additive);
                    debug!(hits, "marquee selection");
                }
                false
            }
            Interaction::Erasing => self.commit(),
        };
        backend.sync(&self.store);
        committed
    }

    /// Commits the backend's interactive transform of the selection.
    pub fn end_transform<B>(&mut self, backend: &mut B) -> bool
    where
        B: RenderBackend + ?Sized,
    {
        if self.selection.is_empty() {
            return false;
        }
        commit_transform(&mut self.store, &self.selection, backend);
        let committed = self.commit();
        backend.sync(&self.store);
        committed
    }

    /// Commits a drag performed by the backend itself, `position` being
    /// where it dropped the node of `dragged`.
    pub fn end_drag(&mut self, dragged: ElementId, position: Point) -> bool {
        if !self.store.contains(dragged) {
            return false;
        }
        if !self.selection.contains(dragged) {
            self.selection.select(dragged, false);
        }
        drag_move(&mut self.store, &self.selection, dragged, position);
        self.commit()
    }

    fn begin_select<B>(&mut self, point: Point, modifiers: Modifiers, backend: &mut B)
    where
        B: RenderBackend + ?Sized,
    {
        let hit = backend
            .hit_test(point)
            .and_then(|id| self.store.find_by_id(id))
            .map(|element| element.id);

        match hit {
            Some(id) => {
                if modifiers.shift {
                    self.selection.select(id, true);
                } else if !self.selection.contains(id) {
                    self.selection.select(id, false);
                }
                if self.selection.contains(id) {
                    self.interaction = Interaction::Dragging { id, last: point };
                }
            }
            None => {
                if !modifiers.shift {
                    self.selection.clear();
                }
                self.interaction = Interaction::Marquee {
                    origin: point,
                    current: point,
                    additive: modifiers.shift,
                };
            }
        }
    }

    /// Moves the selection by `delta` through the dragged element's anchor.
    fn drag_by(&mut self, dragged: ElementId, delta: Point) {
        let Some(element) = self.store.find_by_id(dragged) else {
            return;
        };
        let target = Point::new(element.x, element.y) + delta;
        drag_move(&mut self.store, &self.selection, dragged, target);
    }

    fn begin_draw(&mut self, tool: Tool, point: Point) {
        let id = self.store.generate_id();
        let style = self.current_style.clone();
        let element = match tool {
            Tool::Rectangle => Element::rectangle(id, point.x, point.y, 0.0, 0.0),
            Tool::Diamond => Element::diamond(id, point.x, point.y, 0.0, 0.0),
            Tool::Ellipse => Element::ellipse(id, point.x, point.y, 0.0, 0.0),
            Tool::Arrow => {
                let start = find_binding_target(&self.store, point, self.settings.hit_tolerance, None);
                Element::arrow(id, point, point)
                    .with_arrow_style(self.current_arrow)
                    .with_bindings(start, None)
            }
            Tool::Line => Element::line(id, point, point),
            Tool::Freehand => Element::freehand(id, vec![point]),
            Tool::Select | Tool::Eraser => return,
        };
        self.store.add(element.with_style(style));
        self.selection.clear();
        self.interaction = Interaction::Drawing { id, origin: point };
        debug!(%id, %tool, "draw started");
    }

    /// Reshapes the draft so it spans from `origin` to `point`. Shift keeps
    /// shapes square.
    fn update_draft(&mut self, id: ElementId, origin: Point, point: Point, modifiers: Modifiers) {
        self.store.update(id, |element| match &mut element.kind {
            ElementKind::Arrow { points, .. } | ElementKind::Line { points } => {
                if let Some(last) = points.last_mut() {
                    *last = point;
                }
            }
            ElementKind::Freehand { points } => {
                if points.last() != Some(&point) {
                    points.push(point);
                }
            }
            _ => {
                let mut width = point.x - origin.x;
                let mut height = point.y - origin.y;
                if modifiers.shift {
                    let side = width.abs().max(height.abs());
                    width = side.copysign(width);
                    height = side.copysign(height);
                }
                element.width = width;
                element.height = height;
            }
        });
    }

    /// Finalises the draft: drops it when degenerate, otherwise normalises
    /// it, binds an arrow's end and selects it.
    fn finish_draw(&mut self, id: ElementId, point: Point) {
        let Some(draft) = self.store.find_by_id(id) else {
            return;
        };
        if draft.is_degenerate(self.settings.min_element_size) {
            debug!(%id, element_type = %draft.element_type(), "degenerate element discarded");
            self.store.remove(id);
            return;
        }

        let end_target = if draft.bindings().is_some() {
            find_binding_target(&self.store, point, self.settings.hit_tolerance, Some(id))
        } else {
            None
        };
        self.store.update(id, |element| {
            element.normalize();
            if let ElementKind::Arrow { end_binding, .. } = &mut element.kind {
                *end_binding = end_target;
            }
        });
        self.selection.select(id, false);
        debug!(%id, "draw finished");
    }

    fn erase_at<B>(&mut self, point: Point, backend: &mut B)
    where
        B: RenderBackend + ?Sized,
    {
        if let Some(id) = backend.hit_test(point) {
            if self.store.remove(id) {
                debug!(%id, "erased");
                self.selection.retain_existing(&self.store);
                backend.sync(&self.store);
            }
        }
    }
}
