use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use monthcal::{
    app::{AppState, Message},
    input,
    storage::config::Config,
    ui::theme::Theme,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::cli::CliOptions;
use crate::tui::{presentation::ui, sample_events::add_sample_events};

pub fn run_tui(options: CliOptions, config: Config) -> Result<()> {
    let mut app = build_app(&options, &config);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode().ok();
        return Err(err).context("Failed to enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();
            return Err(err).context("Failed to initialise terminal");
        }
    };

    let res = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        tracing::error!("Session ended with error: {:?}", err);
    }
    tracing::info!("monthcal exiting");
    res
}

fn build_app(options: &CliOptions, config: &Config) -> AppState {
    let theme_name = options.theme.as_deref().unwrap_or(&config.ui.theme);
    let mut app = AppState::new()
        .with_theme(Theme::get_by_name(theme_name))
        .with_date_format(config.ui.date_format.clone())
        .with_hints(config.ui.show_hints);

    if let Some(month) = options.month {
        app = app.with_current_date(month);
    }
    if options.sample {
        add_sample_events(&mut app);
    }
    app
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    app.update(Message::Resize(terminal.size()?));

    while !app.should_quit {
        app.today = Local::now().date_naive();
        terminal.draw(|f| ui(f, app))?;

        let message = match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    Some(Message::Quit)
                } else {
                    input::handle_key(key.code, app)
                }
            }
            TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let screen = terminal.size()?;
                input::mouse::handle_click(mouse.column, mouse.row, screen, app)
            }
            TermEvent::Resize(width, height) => Some(Message::Resize(Rect::new(0, 0, width, height))),
            _ => None,
        };

        if let Some(message) = message {
            app.update(message);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn cli_theme_overrides_config_theme() {
        let options = CliOptions {
            theme: Some("nord".to_string()),
            ..CliOptions::default()
        };
        let app = build_app(&options, &Config::default());
        assert_eq!(app.theme.name, "nord");
    }

    #[test]
    fn config_settings_reach_app_state() {
        let mut config = Config::default();
        config.ui.theme = "gruvbox".to_string();
        config.ui.date_format = "%d/%m/%Y".to_string();
        config.ui.show_hints = false;

        let app = build_app(&CliOptions::default(), &config);

        assert_eq!(app.theme.name, "gruvbox");
        assert_eq!(app.date_format, "%d/%m/%Y");
        assert!(!app.show_hints);
    }

    #[test]
    fn month_option_sets_reference_date() {
        let month = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let options = CliOptions {
            month: Some(month),
            ..CliOptions::default()
        };
        let app = build_app(&options, &Config::default());
        assert_eq!(app.current_date, month);
    }

    #[test]
    fn sample_option_seeds_events() {
        let options = CliOptions {
            sample: true,
            ..CliOptions::default()
        };
        let app = build_app(&options, &Config::default());
        assert!(!app.events.is_empty());
    }
}
