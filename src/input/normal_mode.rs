use crossterm::event::KeyCode;

use crate::app::Message;

pub fn handle_key(key: KeyCode) -> Option<Message> {
    let message = match key {
        KeyCode::Char('h') | KeyCode::Left => Message::MoveCursor(-1),
        KeyCode::Char('l') | KeyCode::Right => Message::MoveCursor(1),
        KeyCode::Char('j') | KeyCode::Down => Message::MoveCursor(7),
        KeyCode::Char('k') | KeyCode::Up => Message::MoveCursor(-7),
        KeyCode::Tab => Message::FocusNextChip,
        KeyCode::Enter => Message::ActivateCursor,
        KeyCode::Char('a') => Message::CreateAtCursor,
        KeyCode::Char('c') => Message::CreateEvent,
        KeyCode::Char('[') | KeyCode::Char('{') => Message::PreviousMonth,
        KeyCode::Char(']') | KeyCode::Char('}') => Message::NextMonth,
        KeyCode::Char('t') => Message::Today,
        KeyCode::Char(':') => Message::EnterCommandMode,
        KeyCode::Char('?') => Message::ShowHelp,
        KeyCode::Char('q') => Message::Quit,
        _ => return None,
    };
    Some(message)
}

pub fn handle_help_key(key: KeyCode) -> Option<Message> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollHelp(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollHelp(-1)),
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => Some(Message::CloseHelp),
        _ => None,
    }
}
