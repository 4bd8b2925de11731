use freeboard_canvas::{Editor, Point, SceneBackend, Tool};
use freeboard_core::{KeyEvent, Modifiers};
use freeboard_settings::{Config, SettingsPersistence};
use tempfile::TempDir;

use crate::support::*;

const CONFIG: &str = r#"
[canvas]
min_element_size = 50.0
paste_offset = 25.0

[history]
max_depth = 3

[shortcuts]
undo = ["Ctrl+U"]
paste = ["Ctrl+V"]
copy = ["Ctrl+C"]
tool_rectangle = ["R"]
"#;

fn load() -> Config {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();
    Config::load_from_file(&path).unwrap()
}

#[test]
fn test_canvas_settings_from_file() {
    let mut editor = Editor::with_config(&load());
    let mut backend = SceneBackend::new(editor.settings().hit_tolerance);

    // 40x40 is below the configured minimum.
    assert!(draw(
        &mut editor,
        &mut backend,
        Tool::Rectangle,
        Point::new(0.0, 0.0),
        Point::new(40.0, 40.0),
    )
    .is_none());

    draw_rect(&mut editor, &mut backend, 0.0, 0.0, 100.0, 100.0);
    editor.copy_selected();
    let pasted = editor.paste();
    let copy = editor.store().find_by_id(pasted[0]).unwrap();
    assert_eq!((copy.x, copy.y), (25.0, 25.0));
}

#[test]
fn test_history_depth_from_file() {
    let mut editor = Editor::with_config(&load());
    let mut backend = SceneBackend::new(4.0);
    for i in 0..4 {
        draw_rect(&mut editor, &mut backend, i as f64 * 200.0, 0.0, 100.0, 100.0);
    }
    assert_eq!(editor.history().len(), 3);
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    assert_eq!(editor.store().len(), 2);
}

#[test]
fn test_shortcuts_from_file_replace_defaults() {
    let mut editor = Editor::with_config(&load());
    let mut backend = SceneBackend::new(4.0);
    draw_rect(&mut editor, &mut backend, 0.0, 0.0, 100.0, 100.0);

    assert!(!editor.key_down(&KeyEvent::new("z", Modifiers::ctrl())));
    assert!(editor.key_down(&KeyEvent::new("u", Modifiers::ctrl())));
    assert!(editor.store().is_empty());
}

#[test]
fn test_persisted_setting_reaches_editor() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut settings = SettingsPersistence::load_or_default(&path).unwrap();
    settings.set_value("style.stroke_width", "7").unwrap();
    settings.set_value("shortcuts.tool_ellipse", "Ctrl+E, O").unwrap();
    settings.save().unwrap();

    let reloaded = SettingsPersistence::load_from_file(&path).unwrap();
    let mut editor = Editor::with_config(reloaded.config());
    assert_eq!(editor.current_style().stroke_width, 7.0);
    assert!(editor.key_down(&KeyEvent::new("e", Modifiers::ctrl())));
    assert_eq!(editor.tool(), Tool::Ellipse);
}
