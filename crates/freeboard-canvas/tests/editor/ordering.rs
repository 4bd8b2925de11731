use crate::support::*;

#[test]
fn test_bring_to_front_and_undo() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    let b = draw_rect(&mut editor, &mut backend, 100.0, 0.0, 50.0, 50.0);
    let c = draw_rect(&mut editor, &mut backend, 200.0, 0.0, 50.0, 50.0);

    editor.select(a, false);
    assert!(editor.bring_to_front());
    assert_eq!(editor.store().ids(), vec![b, c, a]);

    assert!(editor.undo());
    assert_eq!(editor.store().ids(), vec![a, b, c]);
}

#[test]
fn test_send_to_back_when_already_there_is_noop() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    draw_rect(&mut editor, &mut backend, 100.0, 0.0, 50.0, 50.0);
    let history = editor.history().len();

    editor.select(a, false);
    assert!(!editor.send_to_back());
    assert_eq!(editor.history().len(), history);
}

#[test]
fn test_bring_forward_steps_each_selected() {
    let (mut editor, mut backend) = setup();
    let a = draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    let b = draw_rect(&mut editor, &mut backend, 100.0, 0.0, 50.0, 50.0);
    let c = draw_rect(&mut editor, &mut backend, 200.0, 0.0, 50.0, 50.0);

    editor.select(a, false);
    editor.select(b, true);
    assert!(editor.bring_forward());
    assert_eq!(editor.store().ids(), vec![c, a, b]);

    editor.select(b, false);
    assert!(editor.send_backward());
    assert_eq!(editor.store().ids(), vec![c, b, a]);
}

#[test]
fn test_ordering_needs_selection() {
    let (mut editor, mut backend) = setup();
    draw_rect(&mut editor, &mut backend, 0.0, 0.0, 50.0, 50.0);
    editor.clear_selection();
    assert!(!editor.bring_to_front());
    assert!(!editor.send_backward());
}
