use trackkit_designer::keyboard::{Key, KeyInput, ShortcutAction};
use trackkit_designer::{DesignerState, Modifiers};

fn ctrl(c: char) -> KeyInput {
    KeyInput::new(Key::Char(c), Modifiers::ctrl())
}

#[test]
fn test_tab_rotates_selection() {
    let mut state = DesignerState::new();
    let id = state.add_quick_text("L100").unwrap();
    state.select_piece(&id, false);

    let action = state.handle_key(KeyInput::new(Key::Tab, Modifiers::NONE));
    assert_eq!(action, Some(ShortcutAction::RotateSelection));
    assert!((state.project().piece(&id).unwrap().rotation_deg - 15.0).abs() < 1e-9);
}

#[test]
fn test_delete_and_undo() {
    let mut state = DesignerState::new();
    let id = state.add_quick_text("L100").unwrap();
    state.select_piece(&id, false);

    state.handle_key(KeyInput::new(Key::Delete, Modifiers::NONE));
    assert!(state.project().is_empty());
    assert!(state.selection().is_empty());

    assert_eq!(state.handle_key(ctrl('z')), Some(ShortcutAction::Undo));
    assert!(state.project().contains(&id));

    let redo = KeyInput::new(
        Key::Char('Z'),
        Modifiers {
            shift: true,
            ..Modifiers::ctrl()
        },
    );
    assert_eq!(state.handle_key(redo), Some(ShortcutAction::Redo));
    assert!(state.project().is_empty());
}

#[test]
fn test_copy_paste_shortcuts() {
    let mut state = DesignerState::new();
    let id = state.add_quick_text("R50-90").unwrap();
    state.select_piece(&id, false);

    assert_eq!(state.handle_key(ctrl('c')), Some(ShortcutAction::Copy));
    assert_eq!(state.handle_key(ctrl('v')), Some(ShortcutAction::Paste));
    assert_eq!(state.project().pieces.len(), 2);
    assert!(!state.selection().contains(&id));
}

#[test]
fn test_escape_clears_selection() {
    let mut state = DesignerState::new();
    let id = state.add_quick_text("L100").unwrap();
    state.select_piece(&id, false);
    state.handle_key(KeyInput::new(Key::Escape, Modifiers::NONE));
    assert!(state.selection().is_empty());
}

#[test]
fn test_text_focus_suppresses_shortcuts() {
    let mut state = DesignerState::new();
    let id = state.add_quick_text("L100").unwrap();
    state.select_piece(&id, false);

    let mut input = KeyInput::new(Key::Delete, Modifiers::NONE);
    input.text_input_focused = true;
    assert_eq!(state.handle_key(input), None);
    assert!(state.project().contains(&id));
}

#[test]
fn test_selection_shortcuts_need_selection() {
    let mut state = DesignerState::new();
    state.add_quick_text("L100").unwrap();
    assert_eq!(state.handle_key(KeyInput::new(Key::Tab, Modifiers::NONE)), None);
    assert_eq!(state.handle_key(ctrl('c')), None);

    assert_eq!(state.handle_key(ctrl('a')), Some(ShortcutAction::SelectAll));
    assert_eq!(state.selection().len(), 1);
}
