//! Z-order commands for the editor.

use std::collections::HashSet;

use super::Editor;
use crate::layers;
use freeboard_core::ElementId;

type Reorder = fn(&[ElementId], &HashSet<ElementId>) -> Vec<ElementId>;

impl Editor {
    /// Moves the selection above everything else.
    pub fn bring_to_front(&mut self) -> bool {
        self.reorder_selection(layers::to_front)
    }

    /// Moves the selection below everything else.
    pub fn send_to_back(&mut self) -> bool {
        self.reorder_selection(layers::to_back)
    }

    /// Moves each selected element one step up.
    pub fn bring_forward(&mut self) -> bool {
        self.reorder_selection(layers::step_forward)
    }

    /// Moves each selected element one step down.
    pub fn send_backward(&mut self) -> bool {
        self.reorder_selection(layers::step_backward)
    }

    fn reorder_selection(&mut self, reorder: Reorder) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let order = self.store.ids();
        let new_order = reorder(&order, self.selection.ids());
        if new_order == order || !self.store.reorder(&new_order) {
            return false;
        }
        self.commit()
    }
}
