use chrono::format::{Item, StrftimeItems};
use chrono::{Days, Local, NaiveDate};
use ratatui::layout::Rect;

use crate::calendar::{grid, Event, EventColor, EventStore};
use crate::editor::{EditorCommand, EventEditor, FormField};
use crate::input::command_mode::{self, Command};
use crate::ui::help;
use crate::ui::month_view::MAX_VISIBLE_CHIPS;
use crate::ui::theme::Theme;

pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PreviousMonth,
    NextMonth,
    Today,
    CreateEvent,
    DateClicked(NaiveDate),
    EventClicked(String),
    MoveCursor(i64),
    FocusNextChip,
    ActivateCursor,
    CreateAtCursor,
    EditorInput(char),
    EditorBackspace,
    EditorNextField,
    EditorPrevField,
    EditorFocus(FormField),
    EditorNextColor,
    EditorPrevColor,
    EditorPickColor(EventColor),
    EditorActivate,
    EditorSubmit,
    EditorDelete,
    EditorClose,
    EnterCommandMode,
    CommandInput(char),
    CommandBackspace,
    CommandExecute,
    CommandCancel,
    ShowHelp,
    ScrollHelp(i32),
    CloseHelp,
    Resize(Rect),
    Quit,
}

pub struct AppState {
    pub mode: Mode,
    pub current_date: NaiveDate,
    pub today: NaiveDate,
    pub events: EventStore,
    pub editor: EventEditor,
    pub focused_chip: Option<usize>,
    pub command_buffer: String,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub screen: Rect,
    pub theme: Theme,
    pub date_format: String,
    pub show_hints: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            mode: Mode::Normal,
            current_date: today,
            today,
            events: EventStore::new(),
            editor: EventEditor::new(),
            focused_chip: None,
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            help_scroll: 0,
            screen: Rect::new(0, 0, 80, 24),
            theme: Theme::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_hints: true,
            should_quit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    pub fn with_current_date(mut self, date: NaiveDate) -> Self {
        self.current_date = date;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.events_for_date(date)
    }

    pub fn month_label(&self) -> String {
        grid::month_label(self.current_date)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        let items: Vec<Item> = StrftimeItems::new(&self.date_format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        date.format_with_items(items.into_iter()).to_string()
    }

    pub fn focused_event(&self) -> Option<&Event> {
        let index = self.focused_chip?;
        self.events_for_date(self.current_date).get(index).copied()
    }

    fn visible_chip_count(&self, date: NaiveDate) -> usize {
        self.events_for_date(date).len().min(MAX_VISIBLE_CHIPS)
    }

    pub fn update(&mut self, message: Message) {
        tracing::trace!("message: {:?}", message);
        match message {
            Message::PreviousMonth => self.set_current_date(grid::shift_month(self.current_date, -1)),
            Message::NextMonth => self.set_current_date(grid::shift_month(self.current_date, 1)),
            Message::Today => self.set_current_date(self.today),
            Message::CreateEvent => self.open_create(self.today),
            Message::DateClicked(date) => self.open_create(date),
            Message::EventClicked(id) => self.open_edit(&id),
            Message::MoveCursor(days) => self.move_cursor(days),
            Message::FocusNextChip => self.focus_next_chip(),
            Message::ActivateCursor => match self.focused_event().map(|e| e.id.clone()) {
                Some(id) => self.open_edit(&id),
                None => self.open_create(self.current_date),
            },
            Message::CreateAtCursor => self.open_create(self.current_date),
            Message::EditorInput(c) => self.editor.input_char(c),
            Message::EditorBackspace => self.editor.backspace(),
            Message::EditorNextField => self.editor.next_field(),
            Message::EditorPrevField => self.editor.prev_field(),
            Message::EditorFocus(field) => self.editor.focus(field),
            Message::EditorNextColor => self.editor.next_color(),
            Message::EditorPrevColor => self.editor.prev_color(),
            Message::EditorPickColor(color) => self.editor.pick_color(color),
            Message::EditorActivate => match self.editor.active_field {
                FormField::Cancel => self.close_editor(),
                FormField::Delete => self.delete_from_editor(),
                _ => self.submit_editor(),
            },
            Message::EditorSubmit => self.submit_editor(),
            Message::EditorDelete => self.delete_from_editor(),
            Message::EditorClose => self.close_editor(),
            Message::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer = ":".to_string();
                self.status_message = None;
            }
            Message::CommandInput(c) => self.command_buffer.push(c),
            Message::CommandBackspace => {
                self.command_buffer.pop();
                if self.command_buffer.is_empty() {
                    self.mode = Mode::Normal;
                }
            }
            Message::CommandExecute => self.execute_command(),
            Message::CommandCancel => {
                self.command_buffer.clear();
                self.mode = Mode::Normal;
            }
            Message::ShowHelp => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            Message::ScrollHelp(delta) => {
                self.help_scroll = self
                    .help_scroll
                    .saturating_add_signed(delta as isize)
                    .min(help::max_scroll(self.screen));
            }
            Message::CloseHelp => {
                self.show_help = false;
                self.help_scroll = 0;
            }
            Message::Resize(screen) => {
                self.screen = screen;
                self.help_scroll = self.help_scroll.min(help::max_scroll(screen));
            }
            Message::Quit => self.should_quit = true,
        }
    }

    fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.focused_chip = None;
    }

    fn move_cursor(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            self.current_date.checked_add_days(step)
        } else {
            self.current_date.checked_sub_days(step)
        };
        if let Some(date) = moved {
            self.set_current_date(date);
        }
    }

    fn focus_next_chip(&mut self) {
        let count = self.visible_chip_count(self.current_date);
        self.focused_chip = match self.focused_chip {
            _ if count == 0 => None,
            None => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            Some(_) => None,
        };
    }

    fn open_create(&mut self, date: NaiveDate) {
        self.editor.open_for_create(date);
        self.mode = Mode::Insert;
    }

    fn open_edit(&mut self, id: &str) {
        let Some(event) = self.events.get(id) else {
            tracing::warn!("Edit requested for unknown event {}", id);
            return;
        };
        let event = event.clone();
        self.editor.open_for_edit(&event);
        self.mode = Mode::Insert;
    }

    fn close_editor(&mut self) {
        self.editor.close();
        self.mode = Mode::Normal;
    }

    fn submit_editor(&mut self) {
        match self.editor.submit() {
            Ok(command) => {
                self.apply(command);
                self.mode = Mode::Normal;
            }
            Err(rejection) => {
                tracing::debug!("Submit rejected: {}", rejection);
            }
        }
    }

    fn delete_from_editor(&mut self) {
        if let Some(command) = self.editor.request_delete() {
            self.apply(command);
            self.mode = Mode::Normal;
        }
    }

    fn apply(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::Create(data) => {
                let event = self.events.add_event(data);
                tracing::info!("Created event {} on {}", event.id, event.date);
            }
            EditorCommand::Update { id, data } => {
                if self.events.update_event(&id, data) {
                    tracing::info!("Updated event {}", id);
                }
            }
            EditorCommand::Delete(id) => {
                if self.events.delete_event(&id) {
                    tracing::info!("Deleted event {}", id);
                }
            }
        }
        let count = self.visible_chip_count(self.current_date);
        if self.focused_chip.is_some_and(|i| i >= count) {
            self.focused_chip = count.checked_sub(1);
        }
    }

    fn execute_command(&mut self) {
        let command = command_mode::parse_command(&self.command_buffer);
        self.command_buffer.clear();
        self.mode = Mode::Normal;

        match command {
            Command::Quit => self.should_quit = true,
            Command::Today => self.set_current_date(self.today),
            Command::Goto(date) => self.set_current_date(date),
            Command::NewEvent(title) => {
                self.open_create(self.current_date);
                if let Some(title) = title {
                    self.editor.title = title;
                }
            }
            Command::Theme(name) => {
                self.theme = Theme::get_by_name(&name);
                tracing::info!("Switched theme to {}", self.theme.name);
            }
            Command::Help => self.update(Message::ShowHelp),
            Command::Error(message) => {
                tracing::debug!("Command error: {}", message);
                self.status_message = Some(message);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
