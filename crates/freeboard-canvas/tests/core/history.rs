use freeboard_canvas::{Element, ElementStore, History};
use freeboard_core::ElementId;

fn add_rect(store: &mut ElementStore) -> ElementId {
    let id = store.generate_id();
    store.add(Element::rectangle(id, 0.0, 0.0, 10.0, 10.0))
}

#[test]
fn test_new_history_has_nothing_to_undo() {
    let history = History::new(ElementStore::new().snapshot(), 50);
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_commit_of_unchanged_store_is_skipped() {
    let mut store = ElementStore::new();
    let mut history = History::new(store.snapshot(), 50);

    assert!(!history.commit(store.snapshot()));
    add_rect(&mut store);
    assert!(history.commit(store.snapshot()));
    assert!(!history.commit(store.snapshot()));
    assert_eq!(history.len(), 2);
}

#[test]
fn test_new_commit_discards_redo_branch() {
    let mut store = ElementStore::new();
    let mut history = History::new(store.snapshot(), 50);

    let a = add_rect(&mut store);
    history.commit(store.snapshot());
    add_rect(&mut store);
    history.commit(store.snapshot());

    let snapshot = history.undo().unwrap();
    store.restore(&snapshot);
    assert_eq!(store.ids(), vec![a]);
    assert!(history.can_redo());

    let c = add_rect(&mut store);
    assert!(history.commit(store.snapshot()));
    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);

    let entries: Vec<Vec<ElementId>> = history.snapshots().iter().map(|s| s.ids()).collect();
    assert_eq!(entries, vec![vec![], vec![a], vec![a, c]]);
}

#[test]
fn test_undo_and_redo_stop_at_the_ends() {
    let mut store = ElementStore::new();
    let mut history = History::new(store.snapshot(), 50);
    add_rect(&mut store);
    history.commit(store.snapshot());

    assert!(history.redo().is_none());
    assert!(history.undo().unwrap().is_empty());
    assert!(history.undo().is_none());
    assert_eq!(history.redo().unwrap().len(), 1);
    assert_eq!(history.cursor(), 1);
}

#[test]
fn test_depth_limit_drops_oldest() {
    let mut store = ElementStore::new();
    let mut history = History::new(store.snapshot(), 3);

    for _ in 0..5 {
        add_rect(&mut store);
        history.commit(store.snapshot());
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.snapshots()[0].len(), 3);
    assert_eq!(history.current().len(), 5);
}

#[test]
fn test_depth_is_clamped() {
    let history = History::new(ElementStore::new().snapshot(), 0);
    assert_eq!(history.max_depth(), 2);
}

#[test]
fn test_clear_starts_over() {
    let mut store = ElementStore::new();
    let mut history = History::new(store.snapshot(), 10);
    add_rect(&mut store);
    history.commit(store.snapshot());

    history.clear(store.snapshot());
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
    assert_eq!(history.current().len(), 1);
}
