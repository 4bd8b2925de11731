use freeboard_canvas::{resolve_arrow, resolve_endpoint, Element, ElementStore, Point};
use freeboard_core::ElementId;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

/// Two 100x50 rectangles side by side with an arrow bound between their
/// centers.
fn connected() -> (ElementStore, ElementId, Element) {
    let mut store = ElementStore::new();
    let a = store.add(Element::rectangle(ElementId(1), 0.0, 0.0, 100.0, 50.0));
    let b = store.add(Element::rectangle(ElementId(2), 300.0, 0.0, 100.0, 50.0));
    let arrow = Element::arrow(ElementId(3), Point::new(50.0, 25.0), Point::new(350.0, 25.0))
        .with_bindings(Some(a), Some(b));
    store.add(arrow.clone());
    (store, a, arrow)
}

#[test]
fn test_both_ends_glued_to_facing_edges() {
    let (store, _, arrow) = connected();
    let resolved = resolve_arrow(&store, &arrow).unwrap();
    assert!(approx(resolved.start, Point::new(100.0, 25.0)));
    assert!(approx(resolved.end, Point::new(300.0, 25.0)));
}

#[test]
fn test_rotated_target_moves_the_start() {
    let (mut store, a, arrow) = connected();
    store.update(a, |e| e.rotation = 90.0);

    // Turned upright the rectangle only reaches 25 to the right of its center.
    let resolved = resolve_arrow(&store, &arrow).unwrap();
    assert!(approx(resolved.start, Point::new(75.0, 25.0)));
}

#[test]
fn test_mirrored_target_resolves_like_unmirrored() {
    let (mut store, a, arrow) = connected();
    let plain = resolve_arrow(&store, &arrow).unwrap();
    store.update(a, |e| e.scale_x = -1.0);
    let mirrored = resolve_arrow(&store, &arrow).unwrap();
    assert!(approx(plain.start, mirrored.start));
}

#[test]
fn test_moving_target_drags_the_end_along() {
    let (mut store, a, arrow) = connected();
    store.update(a, |e| e.translate(0.0, 100.0));

    let resolved = resolve_arrow(&store, &arrow).unwrap();
    assert!(approx(resolved.start, Point::new(100.0, 125.0 - 100.0 / 6.0)));
    // The stored points are never rewritten.
    assert_eq!(
        arrow.points().unwrap(),
        &[Point::new(50.0, 25.0), Point::new(350.0, 25.0)]
    );
}

#[test]
fn test_deleted_target_falls_back_to_literal_point() {
    let (mut store, a, arrow) = connected();
    store.remove(a);
    let resolved = resolve_arrow(&store, &arrow).unwrap();
    assert_eq!(resolved.start, Point::new(50.0, 25.0));
    assert!(approx(resolved.end, Point::new(300.0, 25.0)));
}

#[test]
fn test_end_aims_at_resolved_start() {
    let mut store = ElementStore::new();
    let a = store.add(Element::rectangle(ElementId(1), 0.0, 0.0, 100.0, 100.0));
    let b = store.add(Element::diamond(ElementId(2), 300.0, 0.0, 100.0, 100.0));
    let arrow = Element::arrow(ElementId(3), Point::new(50.0, 50.0), Point::new(350.0, 50.0))
        .with_bindings(Some(a), Some(b));

    let resolved = resolve_arrow(&store, &arrow).unwrap();
    assert!(approx(resolved.start, Point::new(100.0, 50.0)));
    assert!(approx(resolved.end, Point::new(300.0, 50.0)));
}

#[test]
fn test_ellipse_endpoint() {
    let ellipse = Element::ellipse(ElementId(1), 0.0, 0.0, 100.0, 100.0);
    let p = resolve_endpoint(&ellipse, Point::new(50.0, 300.0));
    assert!(approx(p, Point::new(50.0, 100.0)));
}

#[test]
fn test_rotated_arrow_literal_points_in_canvas_space() {
    let store = ElementStore::new();
    let arrow = Element::arrow(ElementId(1), Point::new(0.0, 0.0), Point::new(100.0, 0.0))
        .with_rotation(180.0);
    let resolved = resolve_arrow(&store, &arrow).unwrap();
    assert!(approx(resolved.start, Point::new(100.0, 0.0)));
    assert!(approx(resolved.end, Point::new(0.0, 0.0)));
}

#[test]
fn test_non_arrow_does_not_resolve() {
    let store = ElementStore::new();
    let line = Element::line(ElementId(1), Point::ORIGIN, Point::new(5.0, 5.0));
    assert!(resolve_arrow(&store, &line).is_none());
}
