//! Scripted headless session.
//!
//! Draws two shapes joined by an arrow, rotates the first one through the
//! backend's transform handles and walks the history back and forth, logging
//! where the arrow ends up at each step.

use anyhow::{ensure, Context};
use freeboard_canvas::{
    resolve_arrow, Editor, NodeTransform, Point, RenderBackend, SceneBackend, Tool,
};
use freeboard_core::{ElementId, Modifiers};
use freeboard_settings::Config;
use tracing::info;

/// Where the demo arrow was painted at each step.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub elements: usize,
    pub history_len: usize,
    pub bound_start: Point,
    pub rotated_start: Point,
    pub undone_start: Point,
}

fn draw(
    editor: &mut Editor,
    backend: &mut SceneBackend,
    tool: Tool,
    from: Point,
    to: Point,
) -> anyhow::Result<ElementId> {
    editor.set_tool(tool);
    editor.pointer_down(from, Modifiers::NONE, backend);
    editor.pointer_move(to, Modifiers::NONE, backend);
    ensure!(
        editor.pointer_up(to, Modifiers::NONE, backend),
        "{tool} from ({}, {}) to ({}, {}) was discarded",
        from.x,
        from.y,
        to.x,
        to.y
    );
    editor
        .store()
        .last()
        .map(|e| e.id)
        .context("store is empty after drawing")
}

fn arrow_start(editor: &Editor, arrow: ElementId) -> anyhow::Result<Point> {
    let element = editor
        .store()
        .find_by_id(arrow)
        .context("demo arrow is missing")?;
    let resolved = resolve_arrow(editor.store(), element).context("demo arrow did not resolve")?;
    info!(
        %arrow,
        start_x = resolved.start.x,
        start_y = resolved.start.y,
        end_x = resolved.end.x,
        end_y = resolved.end.y,
        "arrow resolved"
    );
    Ok(resolved.start)
}

/// Runs the scripted session against `config`.
pub fn run_demo(config: &Config) -> anyhow::Result<DemoSummary> {
    let mut editor = Editor::with_config(config);
    let mut backend = SceneBackend::new(config.canvas.hit_tolerance);

    let source = draw(
        &mut editor,
        &mut backend,
        Tool::Rectangle,
        Point::new(0.0, 0.0),
        Point::new(160.0, 100.0),
    )?;
    let target = draw(
        &mut editor,
        &mut backend,
        Tool::Ellipse,
        Point::new(320.0, 0.0),
        Point::new(480.0, 100.0),
    )?;
    let arrow = draw(
        &mut editor,
        &mut backend,
        Tool::Arrow,
        Point::new(80.0, 50.0),
        Point::new(400.0, 50.0),
    )?;

    let bindings = editor
        .store()
        .find_by_id(arrow)
        .and_then(|e| e.bindings());
    ensure!(
        bindings == Some((Some(source), Some(target))),
        "arrow did not bind to both shapes: {bindings:?}"
    );
    let bound_start = arrow_start(&editor, arrow)?;

    editor.select(source, false);
    let rest = editor
        .store()
        .find_by_id(source)
        .map(NodeTransform::at_rest)
        .context("source shape is missing")?;
    backend.set_node_transform(
        source,
        NodeTransform {
            rotation: 30.0,
            ..rest
        },
    );
    ensure!(editor.end_transform(&mut backend), "rotation was not committed");
    info!(%source, rotation = 30.0, "rotated source shape");
    let rotated_start = arrow_start(&editor, arrow)?;

    ensure!(editor.undo(), "nothing to undo");
    let undone_start = arrow_start(&editor, arrow)?;
    ensure!(editor.redo(), "nothing to redo");
    backend.sync(editor.store());

    let summary = DemoSummary {
        elements: editor.store().len(),
        history_len: editor.history().len(),
        bound_start,
        rotated_start,
        undone_start,
    };
    info!(
        elements = summary.elements,
        history = summary.history_len,
        "demo finished"
    );
    Ok(summary)
}
