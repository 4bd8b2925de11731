use freeboard_canvas::{NodeTransform, Point, Tool};
use freeboard_core::Modifiers;

use crate::support::*;

#[test]
fn test_drag_moves_selected_shape() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    let before = editor.history().len();

    editor.set_tool(Tool::Select);
    assert!(drag(&mut editor, &mut backend, Point::new(25.0, 25.0), Point::new(35.0, 45.0)));

    let rect = editor.store().find_by_id(a).unwrap();
    assert_eq!((rect.x, rect.y), (10.0, 20.0));
    assert_eq!(editor.history().len(), before + 1);
}

#[test]
fn test_drag_of_line_is_incremental() {
    let (mut editor, mut backend) = setup();
    let line = draw(
        &mut editor,
        &mut backend,
        Tool::Line,
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    )
    .unwrap();

    editor.set_tool(Tool::Select);
    editor.pointer_down(Point::new(50.0, 0.0), Modifiers::NONE, &mut backend);
    editor.pointer_move(Point::new(60.0, 10.0), Modifiers::NONE, &mut backend);
    editor.pointer_move(Point::new(70.0, 20.0), Modifiers::NONE, &mut backend);
    assert!(editor.pointer_up(Point::new(70.0, 20.0), Modifiers::NONE, &mut backend));

    let moved = editor.store().find_by_id(line).unwrap();
    assert_eq!(
        moved.points().unwrap(),
        &[Point::new(20.0, 20.0), Point::new(120.0, 20.0)]
    );
    assert_eq!((moved.x, moved.y), (0.0, 0.0));
}

#[test]
fn test_drag_moves_every_selected_element() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    let b = draw_rect(&mut editor, &mut backend, 100.0, 0.0, 50.0, 50.0);
    editor.select_all();

    editor.set_tool(Tool::Select);
    drag(&mut editor, &mut backend, Point::new(125.0, 25.0), Point::new(125.0, 75.0));

    assert_eq!(editor.store().find_by_id(a).unwrap().y, 50.0);
    assert_eq!(editor.store().find_by_id(b).unwrap().y, 50.0);
}

#[test]
fn test_end_drag_from_backend() {
    let (mut editor, mut backend) = setup();
    let (a, _, arrow) = connected(&mut editor, &mut backend);

    assert!(editor.end_drag(a, Point::new(0.0, 200.0)));
    assert!(editor.selection().contains(a));
    assert!(!editor.selection().contains(arrow));

    // The start follows the moved rectangle, the arrow itself is untouched.
    let path = arrow_path(&editor, arrow);
    assert!((path[0].x - 100.0).abs() < 1e-6);
    assert!(path[0].y > 150.0);
    assert!(!editor.end_drag(a, Point::new(0.0, 200.0)));
}

#[test]
fn test_shift_click_toggles_selection() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    let b = draw_rect(&mut editor, &mut backend, 100.0, 0.0, 50.0, 50.0);
    assert!(editor.selection().contains(b));

    editor.set_tool(Tool::Select);
    let history = editor.history().len();
    let at_a = Point::new(25.0, 25.0);
    assert!(!drag_with(&mut editor, &mut backend, at_a, at_a, Modifiers::shift()));
    assert!(editor.selection().contains(a) && editor.selection().contains(b));
    assert_eq!(editor.history().len(), history);

    drag_with(&mut editor, &mut backend, at_a, at_a, Modifiers::shift());
    assert!(!editor.selection().contains(a));

    let empty = Point::new(500.0, 500.0);
    drag(&mut editor, &mut backend, empty, empty);
    assert!(editor.selection().is_empty());
}

#[test]
fn test_marquee_selects_intersecting() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    let b = draw_rect(&mut editor, &mut backend, 200.0, 200.0, 50.0, 50.0);
    let history = editor.history().len();

    editor.set_tool(Tool::Select);
    editor.pointer_down(Point::new(-10.0, -10.0), Modifiers::NONE, &mut backend);
    editor.pointer_move(Point::new(60.0, 60.0), Modifiers::NONE, &mut backend);
    let marquee = editor.marquee().unwrap();
    assert_eq!((marquee.width(), marquee.height()), (70.0, 70.0));

    assert!(!editor.pointer_up(Point::new(60.0, 60.0), Modifiers::NONE, &mut backend));
    assert!(editor.marquee().is_none());
    assert!(editor.selection().contains(a));
    assert!(!editor.selection().contains(b));
    assert_eq!(editor.history().len(), history);
}

#[test]
fn test_eraser_removes_and_commits_once() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    let b = draw_rect(&mut editor, &mut backend, 100.0, 0.0, 50.0, 50.0);
    let history = editor.history().len();

    editor.set_tool(Tool::Eraser);
    editor.pointer_down(Point::new(25.0, 25.0), Modifiers::NONE, &mut backend);
    editor.pointer_move(Point::new(125.0, 25.0), Modifiers::NONE, &mut backend);
    assert!(editor.pointer_up(Point::new(125.0, 25.0), Modifiers::NONE, &mut backend));

    assert!(editor.store().is_empty());
    assert!(editor.selection().is_empty());
    assert_eq!(editor.history().len(), history + 1);

    editor.undo();
    assert_eq!(editor.store().ids(), vec![a, b]);
}

#[test]
fn test_click_on_empty_space_inside_line_bounds_selects_nothing() {
    let (mut editor, mut backend) = setup();
    draw(
        &mut editor,
        &mut backend,
        Tool::Line,
        Point::new(0.0, 0.0),
        Point::new(200.0, 200.0),
    )
    .unwrap();
    assert!(!editor.selection().is_empty());

    editor.set_tool(Tool::Select);
    let empty = Point::new(180.0, 20.0);
    assert!(!drag(&mut editor, &mut backend, empty, empty));
    assert!(editor.selection().is_empty());

    // A small jitter is still a click.
    assert!(!drag(&mut editor, &mut backend, empty, Point::new(182.0, 21.0)));
    assert!(editor.selection().is_empty());
}

#[test]
fn test_repeated_end_transform_does_not_reapply_offset() {
    let (mut editor, mut backend) = setup();
    let line = draw(
        &mut editor,
        &mut backend,
        Tool::Line,
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    )
    .unwrap();

    let at_rest = NodeTransform::at_rest(editor.store().find_by_id(line).unwrap());
    backend.set_node_transform(
        line,
        NodeTransform {
            x: 10.0,
            ..at_rest
        },
    );
    assert!(editor.end_transform(&mut backend));
    let history = editor.history().len();
    assert_eq!(
        editor.store().find_by_id(line).unwrap().points().unwrap()[0],
        Point::new(10.0, 0.0)
    );

    assert!(!editor.end_transform(&mut backend));
    assert_eq!(
        editor.store().find_by_id(line).unwrap().points().unwrap()[0],
        Point::new(10.0, 0.0)
    );
    assert_eq!(editor.history().len(), history);
}

#[test]
fn test_end_transform_after_drag_keeps_dragged_position() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 100.0, 50.0);

    let at_rest = NodeTransform::at_rest(editor.store().find_by_id(a).unwrap());
    backend.set_node_transform(
        a,
        NodeTransform {
            rotation: 30.0,
            ..at_rest
        },
    );
    assert!(editor.end_transform(&mut backend));

    editor.set_tool(Tool::Select);
    assert!(drag(&mut editor, &mut backend, Point::new(50.0, 25.0), Point::new(250.0, 25.0)));
    assert_eq!(editor.store().find_by_id(a).unwrap().x, 200.0);
    let history = editor.history().len();

    assert!(!editor.end_transform(&mut backend));
    let rect = editor.store().find_by_id(a).unwrap();
    assert_eq!((rect.x, rect.y, rect.rotation), (200.0, 0.0, 30.0));
    assert_eq!(editor.history().len(), history);
}
