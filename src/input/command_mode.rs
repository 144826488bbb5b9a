use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::Message;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Today,
    Goto(NaiveDate),
    NewEvent(Option<String>),
    Theme(String),
    Help,
    Error(String),
}

pub fn handle_key(key: KeyCode) -> Option<Message> {
    match key {
        KeyCode::Enter => Some(Message::CommandExecute),
        KeyCode::Esc => Some(Message::CommandCancel),
        KeyCode::Backspace => Some(Message::CommandBackspace),
        KeyCode::Char(c) => Some(Message::CommandInput(c)),
        _ => None,
    }
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "today" => Command::Today,
        "help" => Command::Help,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date argument".to_string())
            } else if let Ok(date) = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d") {
                Command::Goto(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
    }

    #[test]
    fn parse_quit_long_form() {
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_today_command() {
        assert_eq!(parse_command(":today"), Command::Today);
    }

    #[test]
    fn parse_goto_with_valid_date() {
        assert_eq!(
            parse_command(":goto 2025-12-25"),
            Command::Goto(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap())
        );
    }

    #[test]
    fn parse_goto_without_date_is_error() {
        assert!(matches!(parse_command(":goto"), Command::Error(_)));
    }

    #[test]
    fn parse_goto_with_bad_date_is_error() {
        assert_eq!(
            parse_command(":goto 25/12/2025"),
            Command::Error("Invalid date format: 25/12/2025".to_string())
        );
    }

    #[test]
    fn parse_new_without_title() {
        assert_eq!(parse_command(":new"), Command::NewEvent(None));
    }

    #[test]
    fn parse_new_joins_title_words() {
        assert_eq!(
            parse_command(":new Team   sync"),
            Command::NewEvent(Some("Team sync".to_string()))
        );
    }

    #[test]
    fn parse_theme_requires_name() {
        assert!(matches!(parse_command(":theme"), Command::Error(_)));
        assert_eq!(parse_command(":theme nord"), Command::Theme("nord".to_string()));
    }

    #[test]
    fn missing_colon_is_error() {
        assert!(matches!(parse_command("q"), Command::Error(_)));
    }

    #[test]
    fn bare_colon_is_empty_command() {
        assert_eq!(parse_command(":"), Command::Error("Empty command".to_string()));
    }

    #[test]
    fn keys_map_to_command_messages() {
        assert_eq!(handle_key(KeyCode::Enter), Some(Message::CommandExecute));
        assert_eq!(handle_key(KeyCode::Char('g')), Some(Message::CommandInput('g')));
        assert_eq!(handle_key(KeyCode::Tab), None);
    }
}
