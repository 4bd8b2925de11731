//! Geometry kernel.
//!
//! Pure functions over [`Point`]s used by the binding resolver, the renderer
//! and hit testing. Angles are in degrees, y grows downwards, so a positive
//! angle turns clockwise on screen.

use crate::model::Point;
use freeboard_core::constants::CURVE_OFFSET_RATIO;
use freeboard_core::ConnectorPath;
use smallvec::{smallvec, SmallVec};

/// Arrow paths never have more than four points (elbow routing).
pub type ArrowPath = SmallVec<[Point; 4]>;

/// Outline family used when casting a ray from a shape's center to its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryShape {
    Rectangle,
    Ellipse,
    Diamond,
}

/// Rotates `p` about `center` by `angle_deg`.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    if angle_deg == 0.0 {
        return p;
    }
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Scale factor `t` such that `center + direction * t` lies on the boundary of
/// a shape with the given half extents, centered at the origin and unrotated.
///
/// A zero direction yields `1.0` and a shape without area yields `0.0`.
pub fn boundary_intersection(
    shape: BoundaryShape,
    half_width: f64,
    half_height: f64,
    direction: Point,
) -> f64 {
    let (dx, dy) = (direction.x, direction.y);
    if dx == 0.0 && dy == 0.0 {
        return 1.0;
    }
    if half_width <= 0.0 || half_height <= 0.0 {
        return 0.0;
    }

    match shape {
        BoundaryShape::Ellipse => {
            let nx = dx / half_width;
            let ny = dy / half_height;
            1.0 / (nx * nx + ny * ny).sqrt()
        }
        BoundaryShape::Diamond => 1.0 / (dx.abs() / half_width + dy.abs() / half_height),
        BoundaryShape::Rectangle => {
            let tx = if dx == 0.0 {
                f64::INFINITY
            } else {
                half_width / dx.abs()
            };
            let ty = if dy == 0.0 {
                f64::INFINITY
            } else {
                half_height / dy.abs()
            };
            tx.min(ty)
        }
    }
}

/// Builds the painted path between two endpoints.
///
/// Elbow routes bend at the horizontal midpoint. Curved routes return a
/// single quadratic control point between the endpoints.
pub fn synthesize_arrow_path(start: Point, end: Point, path: ConnectorPath) -> ArrowPath {
    match path {
        ConnectorPath::Straight => smallvec![start, end],
        ConnectorPath::Elbow => {
            let mid_x = (start.x + end.x) / 2.0;
            smallvec![
                start,
                Point::new(mid_x, start.y),
                Point::new(mid_x, end.y),
                end
            ]
        }
        ConnectorPath::Curved => {
            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let mid = start.midpoint(&end);
            let control = Point::new(
                mid.x - dy * CURVE_OFFSET_RATIO,
                mid.y + dx * CURVE_OFFSET_RATIO,
            );
            smallvec![start, control, end]
        }
    }
}

/// End points of the two barbs of an open arrowhead at `tip`, pointing away
/// from `from`.
pub fn arrowhead_barbs(
    tip: Point,
    from: Point,
    length: f64,
    spread_deg: f64,
) -> Option<(Point, Point)> {
    let back = from - tip;
    let len = back.length();
    if len == 0.0 || length <= 0.0 {
        return None;
    }
    let reach = tip + back * (length / len);
    Some((
        rotate_point(reach, tip, spread_deg),
        rotate_point(reach, tip, -spread_deg),
    ))
}

/// Shortest distance from `p` to the segment `a`..`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&(a + ab * t))
}

/// Shortest distance from `p` to an open polyline.
pub fn distance_to_polyline(p: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => p.distance_to(only),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(p, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}
