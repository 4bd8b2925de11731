//! Shared helpers for driving an editor through pointer events.

#![allow(dead_code)]

use freeboard_canvas::{ArrowPath, Editor, Point, PrimitiveGeometry, SceneBackend, Tool};
use freeboard_core::{ElementId, Modifiers};

pub fn setup() -> (Editor, SceneBackend) {
    (Editor::new(), SceneBackend::new(4.0))
}

pub fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

/// Presses at `from`, moves to `to` and releases there.
pub fn drag_with(
    editor: &mut Editor,
    backend: &mut SceneBackend,
    from: Point,
    to: Point,
    modifiers: Modifiers,
) -> bool {
    editor.pointer_down(from, modifiers, backend);
    editor.pointer_move(to, modifiers, backend);
    editor.pointer_up(to, modifiers, backend)
}

pub fn drag(editor: &mut Editor, backend: &mut SceneBackend, from: Point, to: Point) -> bool {
    drag_with(editor, backend, from, to, Modifiers::NONE)
}

/// Draws with `tool` and returns the new element, if one was kept.
pub fn draw(
    editor: &mut Editor,
    backend: &mut SceneBackend,
    tool: Tool,
    from: Point,
    to: Point,
) -> Option<ElementId> {
    editor.set_tool(tool);
    let before = editor.store().len();
    drag(editor, backend, from, to);
    if editor.store().len() > before {
        editor.store().last().map(|e| e.id)
    } else {
        None
    }
}

pub fn draw_rect(
    editor: &mut Editor,
    backend: &mut SceneBackend,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> ElementId {
    draw(
        editor,
        backend,
        Tool::Rectangle,
        Point::new(x, y),
        Point::new(x + width, y + height),
    )
    .expect("rectangle should be kept")
}

/// Two 100x100 rectangles with an arrow drawn between their centers.
pub fn connected(
    editor: &mut Editor,
    backend: &mut SceneBackend,
) -> (ElementId, ElementId, ElementId) {
    let a = draw_rect(editor, backend, 0.0, 0.0, 100.0, 100.0);
    let b = draw_rect(editor, backend, 300.0, 0.0, 100.0, 100.0);
    let arrow = draw(
        editor,
        backend,
        Tool::Arrow,
        Point::new(50.0, 50.0),
        Point::new(350.0, 50.0),
    )
    .expect("arrow should be kept");
    (a, b, arrow)
}

/// Painted path of the arrow `id`.
pub fn arrow_path(editor: &Editor, id: ElementId) -> ArrowPath {
    editor
        .render()
        .into_iter()
        .find(|p| p.id == id)
        .and_then(|p| match p.geometry {
            PrimitiveGeometry::Arrow { path, .. } => Some(path),
            _ => None,
        })
        .expect("arrow primitive")
}
