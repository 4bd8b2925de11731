//! Z-order operations.
//!
//! Each function takes the current bottom-to-top id order and the selected
//! ids and returns the new order, ready for [`ElementStore::reorder`].
//!
//! [`ElementStore::reorder`]: crate::store::ElementStore::reorder

use std::collections::HashSet;

use freeboard_core::ElementId;

fn partition(order: &[ElementId], selected: &HashSet<ElementId>) -> (Vec<ElementId>, Vec<ElementId>) {
    order.iter().copied().partition(|id| selected.contains(id))
}

/// Moves the selection to the bottom as one block, keeping relative order.
pub fn to_back(order: &[ElementId], selected: &HashSet<ElementId>) -> Vec<ElementId> {
    let (mut picked, rest) = partition(order, selected);
    picked.extend(rest);
    picked
}

/// Moves the selection to the top as one block, keeping relative order.
pub fn to_front(order: &[ElementId], selected: &HashSet<ElementId>) -> Vec<ElementId> {
    let (picked, mut rest) = partition(order, selected);
    rest.extend(picked);
    rest
}

/// Swaps each selected element with the one below it, lowest index first.
///
/// The swaps are independent, so a selected element at index 0 stays put
/// while a selected neighbour above it is swapped underneath it.
pub fn step_backward(order: &[ElementId], selected: &HashSet<ElementId>) -> Vec<ElementId> {
    let mut result = order.to_vec();
    let indices: Vec<usize> = (0..order.len())
        .filter(|&i| selected.contains(&order[i]))
        .collect();
    for i in indices {
        if i > 0 {
            result.swap(i, i - 1);
        }
    }
    result
}

/// Swaps each selected element with the one above it, highest index first.
pub fn step_forward(order: &[ElementId], selected: &HashSet<ElementId>) -> Vec<ElementId> {
    let mut result = order.to_vec();
    let last = order.len().saturating_sub(1);
    let indices: Vec<usize> = (0..order.len())
        .rev()
        .filter(|&i| selected.contains(&order[i]))
        .collect();
    for i in indices {
        if i < last {
            result.swap(i, i + 1);
        }
    }
    result
}

/// Moves every run of selected elements one step down as a block. Runs
/// already touching the bottom stay where they are.
pub fn shift_block_backward(order: &[ElementId], selected: &HashSet<ElementId>) -> Vec<ElementId> {
    let mut result = order.to_vec();
    let mut i = 0;
    while i < result.len() {
        if !selected.contains(&order[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < order.len() && selected.contains(&order[i]) {
            i += 1;
        }
        if start > 0 {
            result[start - 1..i].rotate_left(1);
        }
    }
    result
}

/// Moves every run of selected elements one step up as a block. Runs
/// already touching the top stay where they are.
pub fn shift_block_forward(order: &[ElementId], selected: &HashSet<ElementId>) -> Vec<ElementId> {
    let mut result = order.to_vec();
    let mut i = 0;
    while i < result.len() {
        if !selected.contains(&order[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < order.len() && selected.contains(&order[i]) {
            i += 1;
        }
        if i < order.len() {
            result[start..=i].rotate_right(1);
        }
    }
    result
}
