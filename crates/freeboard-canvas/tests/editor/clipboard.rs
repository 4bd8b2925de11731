use freeboard_canvas::{ElementKind, Point};

use crate::support::*;

#[test]
fn test_copy_needs_selection() {
    let (mut editor, _) = setup();
    assert_eq!(editor.copy_selected(), 0);
    assert!(editor.paste().is_empty());
}

#[test]
fn test_paste_cascades() {
    let (mut editor, mut backend) = setup();
    draw_rect(&mut editor, &mut backend, 0.0, 0.0, 100.0, 100.0);
    assert_eq!(editor.copy_selected(), 1);

    let first = editor.paste();
    assert_eq!(first.len(), 1);
    let copy = editor.store().find_by_id(first[0]).unwrap();
    assert_eq!((copy.x, copy.y), (10.0, 10.0));
    assert_eq!(editor.selection().len(), 1);
    assert!(editor.selection().contains(first[0]));

    let second = editor.paste();
    let copy = editor.store().find_by_id(second[0]).unwrap();
    assert_eq!((copy.x, copy.y), (20.0, 20.0));
    assert_eq!(editor.history().len(), 4);
}

#[test]
fn test_paste_remaps_bindings_among_copies() {
    let (mut editor, mut backend) = setup();
    connected(&mut editor, &mut backend);
    editor.select_all();
    assert_eq!(editor.copy_selected(), 3);

    let pasted = editor.paste();
    assert_eq!(pasted.len(), 3);
    let arrow = editor.store().find_by_id(pasted[2]).unwrap();
    assert_eq!(arrow.bindings(), Some((Some(pasted[0]), Some(pasted[1]))));
    assert_eq!(arrow.rotation, 0.0);

    let points = arrow.points().unwrap();
    assert!(approx(points[0], Point::new(110.0, 60.0)));
    assert!(approx(points[1], Point::new(310.0, 60.0)));

    let path = arrow_path(&editor, pasted[2]);
    assert!(approx(path[0], Point::new(110.0, 60.0)));
}

#[test]
fn test_copied_arrow_alone_loses_bindings() {
    let (mut editor, mut backend) = setup();
    let (_, _, arrow) = connected(&mut editor, &mut backend);
    editor.select(arrow, false);
    editor.copy_selected();

    let pasted = editor.paste();
    let copy = editor.store().find_by_id(pasted[0]).unwrap();
    assert_eq!(copy.bindings(), Some((None, None)));
    assert!(approx(copy.points().unwrap()[0], Point::new(110.0, 60.0)));
}

#[test]
fn test_duplicate_leaves_clipboard_alone() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 100.0, 100.0);

    let copies = editor.duplicate_selected();
    assert_eq!(copies.len(), 1);
    assert_ne!(copies[0], a);
    assert!(editor.clipboard().is_empty());
    assert_eq!(editor.store().len(), 2);
    assert!(matches!(
        editor.store().find_by_id(copies[0]).unwrap().kind,
        ElementKind::Rectangle
    ));
}

#[test]
fn test_delete_releases_bound_arrow() {
    let (mut editor, mut backend) = setup();
    let (a, b, arrow) = connected(&mut editor, &mut backend);

    editor.select(a, false);
    editor.select(b, true);
    assert_eq!(editor.delete_selected(), 2);
    assert!(editor.selection().is_empty());

    let path = arrow_path(&editor, arrow);
    assert!(approx(path[0], Point::new(50.0, 50.0)));
    assert!(approx(path[path.len() - 1], Point::new(350.0, 50.0)));

    assert!(editor.undo());
    assert!(approx(arrow_path(&editor, arrow)[0], Point::new(100.0, 50.0)));
}
