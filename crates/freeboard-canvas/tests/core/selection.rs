use freeboard_canvas::{Bounds, Element, ElementStore, Point, Selection};
use freeboard_core::ElementId;

fn store_of_three() -> (ElementStore, [ElementId; 3]) {
    let mut store = ElementStore::new();
    let a = store.add(Element::rectangle(ElementId(1), 0.0, 0.0, 50.0, 50.0));
    let b = store.add(Element::ellipse(ElementId(2), 100.0, 0.0, 50.0, 50.0));
    let c = store.add(Element::line(
        ElementId(3),
        Point::new(200.0, 0.0),
        Point::new(250.0, 50.0),
    ));
    (store, [a, b, c])
}

#[test]
fn test_select_all_makes_topmost_primary() {
    let (store, [_, _, c]) = store_of_three();
    let mut selection = Selection::new();
    selection.select_all(&store);
    assert_eq!(selection.len(), 3);
    assert_eq!(selection.primary(), Some(c));
}

#[test]
fn test_ordered_ids_follow_z_order() {
    let (store, [a, b, c]) = store_of_three();
    let mut selection = Selection::new();
    selection.select(c, false);
    selection.select(a, true);
    assert_eq!(selection.ordered_ids(&store), vec![a, c]);
    assert!(!selection.contains(b));
}

#[test]
fn test_additive_marquee_keeps_selection() {
    let (store, [a, b, c]) = store_of_three();
    let mut selection = Selection::new();
    selection.select(a, false);

    let hits = selection.select_in_rect(&store, Bounds::new(90.0, -10.0, 260.0, 10.0), true);
    assert_eq!(hits, 2);
    assert!(selection.contains(a) && selection.contains(b) && selection.contains(c));

    let hits = selection.select_in_rect(&store, Bounds::new(90.0, -10.0, 160.0, 10.0), false);
    assert_eq!(hits, 1);
    assert_eq!(selection.ordered_ids(&store), vec![b]);
}

#[test]
fn test_clear() {
    let (store, _) = store_of_three();
    let mut selection = Selection::new();
    selection.select_all(&store);
    selection.clear();
    assert!(selection.is_empty());
    assert_eq!(selection.primary(), None);
}
