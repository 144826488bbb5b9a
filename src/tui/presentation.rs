use monthcal::{
    app::{AppState, Mode},
    ui::geometry::ScreenLayout,
};
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let layout = ScreenLayout::compute(f.size());

    calendar_views::header::render(f, app, layout.header);
    calendar_views::month::render(f, app, layout.grid);

    let (status_text, status_color, alignment) = status_line(app);
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status);

    if app.editor.is_open() {
        dialogs::event_form::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}

fn status_line(app: &AppState) -> (String, ratatui::style::Color, Alignment) {
    if matches!(app.mode, Mode::Command) {
        return (app.command_buffer.clone(), app.theme.command_mode, Alignment::Left);
    }
    if let Some(message) = &app.status_message {
        return (message.clone(), app.theme.danger, Alignment::Left);
    }

    let mut text = format!("Events: {}", app.events.len());
    if app.show_hints {
        text.push_str(match app.mode {
            Mode::Insert => " | Tab = Next field | Enter = Save | Esc = Cancel",
            _ => " | hjkl = Move | Enter = Open | a = Add | Tab = Events | ? = Help | q = Quit",
        });
    }
    (text, app.theme.status_bar, Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthcal::app::Message;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer.get(x, y).symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn status_bar_counts_events_and_shows_hints() {
        let app = AppState::new();
        let screen = draw(&app);
        assert!(screen.contains("Events: 0"));
        assert!(screen.contains("? = Help"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let app = AppState::new().with_hints(false);
        let screen = draw(&app);
        assert!(screen.contains("Events: 0"));
        assert!(!screen.contains("? = Help"));
    }

    #[test]
    fn command_buffer_replaces_status() {
        let mut app = AppState::new();
        app.update(Message::EnterCommandMode);
        app.update(Message::CommandInput('g'));
        let (text, _, alignment) = status_line(&app);
        assert_eq!(text, ":g");
        assert_eq!(alignment, Alignment::Left);
    }

    #[test]
    fn command_error_is_shown_in_status() {
        let mut app = AppState::new();
        app.status_message = Some("Unknown command: :zz".to_string());
        assert!(draw(&app).contains("Unknown command: :zz"));
    }

    #[test]
    fn editor_overlay_is_drawn_when_open() {
        let mut app = AppState::new();
        assert!(!draw(&app).contains("Create New Event"));
        app.update(Message::CreateEvent);
        assert!(draw(&app).contains("Create New Event"));
    }
}
