//! # Freeboard Canvas
//!
//! The infinite-canvas core: elements, arrows glued to the shapes they
//! connect, undo/redo and z-order, driven by an [`Editor`] that turns input
//! events into store mutations.
//!
//! ## Core Components
//!
//! - **Geometry**: point rotation, ray/boundary intersection, arrow routing
//! - **Model**: the tagged [`Element`] variant, visual center, hit testing
//! - **Store**: ordered copy-on-write element sequence; order is paint order
//! - **Binding**: resolves bound arrow endpoints at render time
//! - **Transform**: folds backend-reported transforms into element fields
//! - **History**: linear undo/redo over store snapshots
//! - **Layers**: to front, to back, step forward, step backward
//! - **Selection**: point, additive and marquee selection
//! - **Render**: paint primitives and the [`RenderBackend`] trait
//!
//! ## Architecture
//!
//! ```text
//! Editor (input events, tools, clipboard)
//!   ├── ElementStore ── Snapshot ── History
//!   ├── Selection
//!   ├── Transform normalizer ──> RenderBackend (node transforms)
//!   └── render() ──> Binding resolver ──> RenderPrimitive
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use freeboard_canvas::{Editor, Point, SceneBackend, Tool};
//! use freeboard_core::Modifiers;
//!
//! let mut editor = Editor::new();
//! let mut backend = SceneBackend::new(4.0);
//!
//! editor.set_tool(Tool::Rectangle);
//! editor.pointer_down(Point::new(10.0, 10.0), Modifiers::NONE, &mut backend);
//! editor.pointer_move(Point::new(110.0, 60.0), Modifiers::NONE, &mut backend);
//! editor.pointer_up(Point::new(110.0, 60.0), Modifiers::NONE, &mut backend);
//!
//! assert_eq!(editor.store().len(), 1);
//! assert!(editor.undo());
//! assert!(editor.store().is_empty());
//! ```

pub mod binding;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod layers;
pub mod model;
pub mod render;
pub mod selection;
pub mod store;
pub mod transform;

pub use binding::{find_binding_target, resolve_arrow, resolve_endpoint, ResolvedArrow};
pub use editor::{Editor, EditorAction, ShortcutMap, Tool};
pub use geometry::{
    arrowhead_barbs, boundary_intersection, distance_to_segment, rotate_point,
    synthesize_arrow_path, ArrowPath, BoundaryShape,
};
pub use history::History;
pub use model::{Bounds, Element, ElementKind, ElementType, Point};
pub use render::{
    build_primitives, NodeTransform, PrimitiveGeometry, RenderBackend, RenderPrimitive,
    SceneBackend,
};
pub use selection::Selection;
pub use store::{ElementStore, Snapshot};
pub use transform::{apply_node_transform, commit_transform, drag_move, flip, FlipAxis};
