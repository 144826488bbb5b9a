pub mod command_mode;
pub mod insert_mode;
pub mod mouse;
pub mod normal_mode;

use crossterm::event::KeyCode;

use crate::app::{AppState, Message, Mode};

pub fn handle_key(key: KeyCode, state: &AppState) -> Option<Message> {
    if state.show_help {
        return normal_mode::handle_help_key(key);
    }
    match state.mode {
        Mode::Normal => normal_mode::handle_key(key),
        Mode::Insert => insert_mode::handle_key(key, state),
        Mode::Command => command_mode::handle_key(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_overlay_takes_keys_first() {
        let mut state = AppState::new();
        state.update(Message::ShowHelp);
        assert_eq!(handle_key(KeyCode::Char('q'), &state), Some(Message::CloseHelp));
    }

    #[test]
    fn insert_mode_keys_go_to_editor() {
        let mut state = AppState::new();
        state.update(Message::CreateEvent);
        assert_eq!(handle_key(KeyCode::Char('q'), &state), Some(Message::EditorInput('q')));
    }

    #[test]
    fn normal_mode_q_quits() {
        let state = AppState::new();
        assert_eq!(handle_key(KeyCode::Char('q'), &state), Some(Message::Quit));
    }
}
