use std::collections::HashSet;

use freeboard_core::ElementId;

use crate::model::Bounds;
use crate::store::ElementStore;

/// Tracks which elements are selected.
///
/// `Selection` is responsible for:
/// - Tracking which element is the "primary" selection
/// - Point selection, with Shift toggling membership
/// - Marquee (rectangle drag) selection
/// - Dropping ids whose elements no longer exist
///
/// # Selection Model
///
/// - **Primary Selection**: the most recently selected element
/// - **Multiple Selection**: any number of ids in the selected set
///
/// Selection is view state: it is not part of a history snapshot, so after
/// undo or redo the editor calls [`Selection::retain_existing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: HashSet<ElementId>,
    primary: Option<ElementId>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID of the primary selected element.
    pub fn primary(&self) -> Option<ElementId> {
        self.primary
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &HashSet<ElementId> {
        &self.ids
    }

    /// Selected ids in z-order, bottom first.
    pub fn ordered_ids(&self, store: &ElementStore) -> Vec<ElementId> {
        store
            .iter()
            .map(|e| e.id)
            .filter(|id| self.ids.contains(id))
            .collect()
    }

    /// Selects a single element.
    ///
    /// # Arguments
    ///
    /// * `id` - The element to select
    /// * `additive` - Shift-click behaviour: toggle `id` without touching the
    ///   rest of the selection
    pub fn select(&mut self, id: ElementId, additive: bool) {
        if !additive {
            self.ids.clear();
        }
        if additive && self.ids.remove(&id) {
            if self.primary == Some(id) {
                self.primary = None;
            }
            return;
        }
        self.ids.insert(id);
        self.primary = Some(id);
    }

    /// Selects several elements at once, replacing the selection unless
    /// `additive` is set. The last id becomes primary.
    pub fn select_many<I>(&mut self, ids: I, additive: bool)
    where
        I: IntoIterator<Item = ElementId>,
    {
        if !additive {
            self.clear();
        }
        for id in ids {
            self.ids.insert(id);
            self.primary = Some(id);
        }
    }

    /// Selects every element; the topmost becomes primary.
    pub fn select_all(&mut self, store: &ElementStore) {
        self.select_many(store.ids(), false);
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.primary = None;
    }

    /// Drops ids that no longer resolve in `store`.
    pub fn retain_existing(&mut self, store: &ElementStore) {
        self.ids.retain(|id| store.contains(*id));
        if self.primary.is_some_and(|id| !self.ids.contains(&id)) {
            self.primary = None;
        }
    }

    /// Marquee selection: every element whose bounds intersect `rect`.
    ///
    /// Returns the number of elements hit by the marquee.
    pub fn select_in_rect(&mut self, store: &ElementStore, rect: Bounds, additive: bool) -> usize {
        let hits: Vec<ElementId> = store
            .iter()
            .filter(|e| e.bounds().intersects(&rect))
            .map(|e| e.id)
            .collect();
        let count = hits.len();
        self.select_many(hits, additive);
        count
    }
}
