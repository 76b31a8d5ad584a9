//! Keyboard shortcuts.
//!
//! | Key                         | Action            |
//! |-----------------------------|-------------------|
//! | Tab                         | Rotate selection  |
//! | Delete / Backspace          | Delete selection  |
//! | Ctrl+Z                      | Undo              |
//! | Ctrl+Shift+Z, Ctrl+Y        | Redo              |
//! | Ctrl+C                      | Copy selection    |
//! | Ctrl+V                      | Paste             |
//! | Ctrl+A                      | Select all        |
//! | Escape                      | Clear selection   |
//!
//! Nothing fires while a text input has focus. Cmd counts as Ctrl.

use crate::interaction::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Delete,
    Backspace,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
    /// A text field currently owns keyboard focus
    pub text_input_focused: bool,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            text_input_focused: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    RotateSelection,
    DeleteSelection,
    Undo,
    Redo,
    Copy,
    Paste,
    SelectAll,
    ClearSelection,
}

/// Maps a key press to an editor action.
///
/// Selection-dependent shortcuts (rotate, delete, copy) resolve to `None`
/// when nothing is selected.
pub fn resolve_shortcut(input: &KeyInput, has_selection: bool) -> Option<ShortcutAction> {
    if input.text_input_focused {
        return None;
    }

    let command = input.modifiers.command();
    match input.key {
        Key::Tab if has_selection => Some(ShortcutAction::RotateSelection),
        Key::Delete | Key::Backspace if has_selection => Some(ShortcutAction::DeleteSelection),
        Key::Escape => Some(ShortcutAction::ClearSelection),
        Key::Char(c) if command => match c.to_ascii_lowercase() {
            'z' if input.modifiers.shift => Some(ShortcutAction::Redo),
            'z' => Some(ShortcutAction::Undo),
            'y' => Some(ShortcutAction::Redo),
            'c' if has_selection => Some(ShortcutAction::Copy),
            'v' => Some(ShortcutAction::Paste),
            'a' => Some(ShortcutAction::SelectAll),
            _ => None,
        },
        _ => None,
    }
}
