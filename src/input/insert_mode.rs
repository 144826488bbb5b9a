use crossterm::event::KeyCode;

use crate::app::{AppState, Message};
use crate::editor::FormField;

pub fn handle_key(key: KeyCode, state: &AppState) -> Option<Message> {
    let on_color = state.editor.active_field == FormField::Color;
    let message = match key {
        KeyCode::Esc => Message::EditorClose,
        KeyCode::Enter => Message::EditorActivate,
        KeyCode::Tab => Message::EditorNextField,
        KeyCode::BackTab => Message::EditorPrevField,
        KeyCode::Backspace => Message::EditorBackspace,
        KeyCode::Right if on_color => Message::EditorNextColor,
        KeyCode::Left if on_color => Message::EditorPrevColor,
        KeyCode::Char(c) => Message::EditorInput(c),
        _ => return None,
    };
    Some(message)
}
