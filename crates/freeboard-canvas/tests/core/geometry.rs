use freeboard_canvas::geometry::distance_to_polyline;
use freeboard_canvas::{
    arrowhead_barbs, boundary_intersection, rotate_point, synthesize_arrow_path, BoundaryShape,
    Point,
};
use freeboard_core::ConnectorPath;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_rectangle_boundary_on_diagonal() {
    // The shorter edge is hit first.
    let t = boundary_intersection(BoundaryShape::Rectangle, 50.0, 25.0, Point::new(100.0, 100.0));
    assert!(approx(t, 0.25));
}

#[test]
fn test_ellipse_boundary() {
    let t = boundary_intersection(BoundaryShape::Ellipse, 50.0, 25.0, Point::new(100.0, 0.0));
    assert!(approx(t, 0.5));

    let t = boundary_intersection(BoundaryShape::Ellipse, 10.0, 10.0, Point::new(3.0, 4.0));
    let hit = Point::new(3.0, 4.0) * t;
    assert!(approx(hit.length(), 10.0));
}

#[test]
fn test_diamond_boundary() {
    let t = boundary_intersection(BoundaryShape::Diamond, 50.0, 25.0, Point::new(10.0, 10.0));
    let hit = Point::new(10.0, 10.0) * t;
    assert!(approx(hit.x.abs() / 50.0 + hit.y.abs() / 25.0, 1.0));
}

#[test]
fn test_boundary_of_flat_shape_is_center() {
    assert_eq!(
        boundary_intersection(BoundaryShape::Ellipse, 0.0, 20.0, Point::new(1.0, 0.0)),
        0.0
    );
}

#[test]
fn test_full_turn_is_identity() {
    let p = rotate_point(Point::new(7.0, -3.0), Point::new(1.0, 1.0), 360.0);
    assert!(approx(p.x, 7.0));
    assert!(approx(p.y, -3.0));
}

#[test]
fn test_elbow_path_bends_at_mid_x() {
    let path = synthesize_arrow_path(
        Point::new(0.0, 0.0),
        Point::new(100.0, 50.0),
        ConnectorPath::Elbow,
    );
    assert_eq!(
        path.as_slice(),
        &[
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(100.0, 50.0),
        ]
    );
}

#[test]
fn test_straight_and_curved_paths_keep_endpoints() {
    let start = Point::new(-5.0, 2.0);
    let end = Point::new(40.0, 30.0);
    for route in [ConnectorPath::Straight, ConnectorPath::Curved] {
        let path = synthesize_arrow_path(start, end, route);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
    }
}

#[test]
fn test_barbs_sit_at_head_length() {
    let tip = Point::new(100.0, 0.0);
    let (a, b) = arrowhead_barbs(tip, Point::new(0.0, 0.0), 12.0, 30.0).unwrap();
    assert!(approx(a.distance_to(&tip), 12.0));
    assert!(approx(b.distance_to(&tip), 12.0));
    assert!(approx(a.y, -b.y));
    assert!(a.x < tip.x);

    assert!(arrowhead_barbs(tip, tip, 12.0, 30.0).is_none());
    assert!(arrowhead_barbs(tip, Point::ORIGIN, 0.0, 30.0).is_none());
}

#[test]
fn test_distance_to_polyline_edge_cases() {
    assert_eq!(distance_to_polyline(Point::ORIGIN, &[]), f64::INFINITY);
    assert!(approx(
        distance_to_polyline(Point::ORIGIN, &[Point::new(3.0, 4.0)]),
        5.0
    ));
    let zigzag = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(20.0, 0.0),
    ];
    assert!(approx(distance_to_polyline(Point::new(10.0, 10.0), &zigzag), 0.0));
    assert!(approx(distance_to_polyline(Point::new(20.0, -2.0), &zigzag), 2.0));
}
