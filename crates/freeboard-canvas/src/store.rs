//! Element store.
//!
//! The ordered element sequence of a canvas. Sequence order is paint order:
//! the last element is drawn on top, and there is no separate z-index. The
//! sequence is shared copy-on-write, so a clone or a [`Snapshot`] taken
//! before a write keeps seeing the old version.

use std::collections::HashSet;
use std::sync::Arc;

use freeboard_core::ElementId;
use tracing::{debug, warn};

use crate::model::Element;

/// An immutable version of the store's element sequence.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    elements: Arc<Vec<Element>>,
}

impl Snapshot {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements) || self.elements == other.elements
    }
}

/// Ordered, copy-on-write element sequence with id generation.
#[derive(Debug, Clone)]
pub struct ElementStore {
    elements: Arc<Vec<Element>>,
    next_id: u64,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStore {
    pub fn new() -> Self {
        Self {
            elements: Arc::new(Vec::new()),
            next_id: 1,
        }
    }

    /// Hands out a fresh id. Ids are never reused by this store.
    pub fn generate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends `element` on top of the z-order.
    pub fn add(&mut self, element: Element) -> ElementId {
        let id = element.id;
        if id.raw() >= self.next_id {
            self.next_id = id.raw() + 1;
        }
        Arc::make_mut(&mut self.elements).push(element);
        debug!(%id, len = self.elements.len(), "element added");
        id
    }

    /// Applies `patch` to every element matching `predicate`.
    ///
    /// Returns the number of elements patched. The shared sequence is only
    /// cloned when at least one element matches.
    pub fn update_where<P, F>(&mut self, mut predicate: P, mut patch: F) -> usize
    where
        P: FnMut(&Element) -> bool,
        F: FnMut(&mut Element),
    {
        if !self.elements.iter().any(&mut predicate) {
            return 0;
        }
        let mut count = 0;
        for element in Arc::make_mut(&mut self.elements).iter_mut() {
            if predicate(element) {
                patch(element);
                count += 1;
            }
        }
        count
    }

    /// Applies `patch` to the element with `id`.
    pub fn update<F>(&mut self, id: ElementId, patch: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        patch(&mut Arc::make_mut(&mut self.elements)[index]);
        true
    }

    /// Removes every element matching `predicate`, returning how many went.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Element) -> bool,
    {
        if !self.elements.iter().any(&mut predicate) {
            return 0;
        }
        let before = self.elements.len();
        Arc::make_mut(&mut self.elements).retain(|e| !predicate(e));
        let removed = before - self.elements.len();
        debug!(removed, len = self.elements.len(), "elements removed");
        removed
    }

    pub fn remove(&mut self, id: ElementId) -> bool {
        self.remove_where(|e| e.id == id) > 0
    }

    /// Replaces the z-order with `order`.
    ///
    /// `order` must name every current element exactly once; anything else
    /// is rejected and the store is left untouched.
    pub fn reorder(&mut self, order: &[ElementId]) -> bool {
        if order.len() != self.elements.len() {
            warn!(
                expected = self.elements.len(),
                got = order.len(),
                "reorder rejected: wrong length"
            );
            return false;
        }
        let mut seen = HashSet::with_capacity(order.len());
        if !order.iter().all(|id| seen.insert(*id)) {
            warn!("reorder rejected: duplicate ids");
            return false;
        }

        let mut reordered = Vec::with_capacity(order.len());
        for id in order {
            match self.find_by_id(*id) {
                Some(element) => reordered.push(element.clone()),
                None => {
                    warn!(%id, "reorder rejected: unknown id");
                    return false;
                }
            }
        }

        if reordered == *self.elements {
            return true;
        }
        self.elements = Arc::new(reordered);
        debug!(len = self.elements.len(), "elements reordered");
        true
    }

    pub fn find_by_id(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Topmost element, which is the active draft while drawing.
    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elements: Arc::clone(&self.elements),
        }
    }

    /// Replaces the sequence with `snapshot`. The id counter never moves
    /// backwards, so ids handed out after an undo stay unique.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.elements = Arc::clone(&snapshot.elements);
        if let Some(max) = self.elements.iter().map(|e| e.id.raw()).max() {
            self.next_id = self.next_id.max(max + 1);
        }
    }

    /// Whether the live sequence equals `snapshot`.
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        Arc::ptr_eq(&self.elements, &snapshot.elements) || *self.elements == *snapshot.elements
    }
}
