//! Shared numeric defaults.

/// Shapes smaller than this in both dimensions are discarded on release.
pub const DEFAULT_MIN_ELEMENT_SIZE: f64 = 5.0;

/// Pointer slack, in canvas units, used when hit-testing strokes and edges.
pub const DEFAULT_HIT_TOLERANCE: f64 = 4.0;

/// Offset applied to pasted and duplicated elements.
pub const DEFAULT_PASTE_OFFSET: f64 = 10.0;

/// Number of snapshots kept by the history manager.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Length of an open arrowhead barb.
pub const DEFAULT_ARROWHEAD_LENGTH: f64 = 12.0;

/// Half-angle between an arrowhead barb and the shaft, in degrees.
pub const ARROWHEAD_SPREAD_DEG: f64 = 30.0;

/// Radius of a dot arrowhead relative to the stroke width.
pub const DOT_HEAD_RADIUS_FACTOR: f64 = 2.0;

/// Perpendicular offset of a curved connector's control point, as a
/// fraction of the start-to-end vector.
pub const CURVE_OFFSET_RATIO: f64 = 0.2;
