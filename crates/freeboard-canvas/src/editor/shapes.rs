//! Element operations (delete, copy, paste, insert, flip, style) for the editor.

use std::collections::HashMap;

use super::Editor;
use crate::binding::resolve_arrow;
use crate::model::{Element, ElementKind, Point};
use crate::transform::{flip, FlipAxis};
use freeboard_core::{ElementId, StylePatch};
use tracing::debug;

impl Editor {
    /// Deletes the selected elements. Arrows bound to them fall back to
    /// their literal endpoints.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let selection = &self.selection;
        let removed = self.store.remove_where(|e| selection.contains(e.id));
        self.selection.clear();
        self.commit();
        removed
    }

    /// Copies the selected elements to the clipboard, bottom to top.
    pub fn copy_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        self.clipboard = self.selected_copies();
        debug!(count = self.clipboard.len(), "copied to clipboard");
        self.clipboard.len()
    }

    /// Pastes the clipboard offset by the configured paste offset and
    /// selects the copies. Pasting again cascades further.
    pub fn paste(&mut self) -> Vec<ElementId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let offset = self.settings.paste_offset;
        for element in &mut self.clipboard {
            element.translate(offset, offset);
        }
        let source = self.clipboard.clone();
        self.insert_copies(&source)
    }

    /// Copies the selection in place, offset by the paste offset. The
    /// clipboard is left alone.
    pub fn duplicate_selected(&mut self) -> Vec<ElementId> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        let offset = self.settings.paste_offset;
        let mut copies = self.selected_copies();
        for element in &mut copies {
            element.translate(offset, offset);
        }
        self.insert_copies(&copies)
    }

    /// Selected elements in z-order, arrows frozen at their resolved
    /// endpoints so a copy renders where the original did.
    fn selected_copies(&self) -> Vec<Element> {
        self.store
            .iter()
            .filter(|e| self.selection.contains(e.id))
            .map(|e| {
                let mut copy = e.clone();
                if let Some(resolved) = resolve_arrow(&self.store, e) {
                    if let Some(points) = copy.points_mut() {
                        *points = vec![resolved.start, resolved.end];
                    }
                    copy.rotation = 0.0;
                    copy.scale_x = 1.0;
                    copy.scale_y = 1.0;
                }
                copy
            })
            .collect()
    }

    /// Adds `elements` with fresh ids. Bindings between copied elements are
    /// remapped to the copies, bindings to anything else are dropped.
    fn insert_copies(&mut self, elements: &[Element]) -> Vec<ElementId> {
        let id_map: HashMap<ElementId, ElementId> = elements
            .iter()
            .map(|e| (e.id, self.store.generate_id()))
            .collect();

        let mut new_ids = Vec::with_capacity(elements.len());
        for element in elements {
            let mut copy = element.clone();
            copy.id = id_map[&element.id];
            if let ElementKind::Arrow {
                start_binding,
                end_binding,
                ..
            } = &mut copy.kind
            {
                *start_binding = start_binding.and_then(|id| id_map.get(&id).copied());
                *end_binding = end_binding.and_then(|id| id_map.get(&id).copied());
            }
            new_ids.push(self.store.add(copy));
        }

        self.selection.select_many(new_ids.iter().copied(), false);
        self.commit();
        new_ids
    }

    /// Places a text element with its top-left corner at `point`.
    pub fn insert_text(&mut self, point: Point, text: &str) -> Option<ElementId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.store.generate_id();
        let element = Element::text(id, point.x, point.y, text, self.current_style.clone());
        self.place(element)
    }

    /// Places a decoded image centered on `point`. Called by the host once
    /// its asynchronous decode has produced a `source` handle.
    pub fn insert_image(
        &mut self,
        point: Point,
        width: f64,
        height: f64,
        source: &str,
    ) -> Option<ElementId> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let id = self.store.generate_id();
        let element = Element::image(
            id,
            point.x - width / 2.0,
            point.y - height / 2.0,
            width,
            height,
            source,
        )
        .with_style(self.current_style.clone());
        self.place(element)
    }

    fn place(&mut self, element: Element) -> Option<ElementId> {
        let id = self.store.add(element);
        self.selection.select(id, false);
        self.commit();
        Some(id)
    }

    /// Mirrors the selection along `axis`.
    pub fn flip_selected(&mut self, axis: FlipAxis) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        flip(&mut self.store, &self.selection, axis);
        self.commit()
    }

    /// Applies a style-panel edit.
    ///
    /// With nothing selected the patch changes the style used for new
    /// elements; otherwise it patches every selected element and commits.
    /// Arrow-only fields only touch arrows.
    pub fn apply_style(&mut self, patch: &StylePatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        if self.selection.is_empty() {
            self.current_style.apply(patch);
            self.current_arrow.apply(patch);
            return false;
        }

        let selection = &self.selection;
        self.store.update_where(
            |e| selection.contains(e.id),
            |e| {
                e.style.apply(patch);
                if let ElementKind::Arrow { arrow, .. } = &mut e.kind {
                    arrow.apply(patch);
                }
            },
        );
        self.commit()
    }
}
