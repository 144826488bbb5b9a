use chrono::NaiveDate;
use thiserror::Error;

use crate::calendar::{Event, EventColor, EventData};

pub const TIME_INPUT_MAX_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Closed,
    Create,
    Edit(Event),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Time,
    Description,
    Color,
    Save,
    Cancel,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    Create(EventData),
    Update { id: String, data: EventData },
    Delete(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("editor is not open")]
    Closed,
    #[error("title is required")]
    EmptyTitle,
    #[error("no date selected")]
    MissingDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventEditor {
    state: EditorState,
    target_date: Option<NaiveDate>,
    pub title: String,
    pub time: String,
    pub description: String,
    pub color: EventColor,
    pub active_field: FormField,
}

impl Default for EventEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEditor {
    pub fn new() -> Self {
        Self {
            state: EditorState::Closed,
            target_date: None,
            title: String::new(),
            time: String::new(),
            description: String::new(),
            color: EventColor::default(),
            active_field: FormField::Title,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != EditorState::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Edit(_))
    }

    pub fn target_date(&self) -> Option<NaiveDate> {
        self.target_date
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.state {
            EditorState::Edit(event) => Some(event.id.as_str()),
            _ => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() { "Edit Event" } else { "Create New Event" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Event" } else { "Create Event" }
    }

    pub fn open_for_create(&mut self, date: NaiveDate) {
        tracing::debug!("Opening editor to create on {}", date);
        self.state = EditorState::Create;
        self.target_date = Some(date);
        self.reset_fields();
    }

    pub fn open_for_edit(&mut self, event: &Event) {
        tracing::debug!("Opening editor for event {}", event.id);
        self.state = EditorState::Edit(event.clone());
        self.target_date = Some(event.date);
        self.reset_fields();
    }

    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("Closing editor");
        }
        self.state = EditorState::Closed;
        self.reset_fields();
    }

    fn reset_fields(&mut self) {
        match &self.state {
            EditorState::Edit(event) => {
                self.title = event.title.clone();
                self.time = event.time.clone();
                self.description = event.description.clone();
                self.color = event.color;
            }
            EditorState::Create | EditorState::Closed => {
                self.title.clear();
                self.time.clear();
                self.description.clear();
                self.color = EventColor::default();
            }
        }
        self.active_field = FormField::Title;
    }

    pub fn focus_ring(&self) -> &'static [FormField] {
        if self.is_editing() {
            &[
                FormField::Title,
                FormField::Time,
                FormField::Description,
                FormField::Color,
                FormField::Save,
                FormField::Cancel,
                FormField::Delete,
            ]
        } else {
            &[
                FormField::Title,
                FormField::Time,
                FormField::Description,
                FormField::Color,
                FormField::Save,
                FormField::Cancel,
            ]
        }
    }

    pub fn next_field(&mut self) {
        self.leave_field();
        let ring = self.focus_ring();
        let index = ring.iter().position(|f| *f == self.active_field).unwrap_or(0);
        self.active_field = ring[(index + 1) % ring.len()];
    }

    pub fn prev_field(&mut self) {
        self.leave_field();
        let ring = self.focus_ring();
        let index = ring.iter().position(|f| *f == self.active_field).unwrap_or(0);
        self.active_field = ring[(index + ring.len() - 1) % ring.len()];
    }

    pub fn focus(&mut self, field: FormField) {
        if self.focus_ring().contains(&field) {
            self.leave_field();
            self.active_field = field;
        }
    }

    fn leave_field(&mut self) {
        if self.active_field == FormField::Time {
            self.time = normalize_time(&self.time);
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            FormField::Title => self.title.push(c),
            FormField::Time => {
                if (c.is_ascii_digit() || c == ':') && self.time.len() < TIME_INPUT_MAX_LEN {
                    self.time.push(c);
                }
            }
            FormField::Description => self.description.push(c),
            FormField::Color => {
                if let Some(color) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(EventColor::from_index)
                {
                    self.color = color;
                }
            }
            FormField::Save | FormField::Cancel | FormField::Delete => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Time => {
                self.time.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Color | FormField::Save | FormField::Cancel | FormField::Delete => {}
        }
    }

    pub fn next_color(&mut self) {
        self.color = self.color.next();
    }

    pub fn prev_color(&mut self) {
        self.color = self.color.prev();
    }

    pub fn pick_color(&mut self, color: EventColor) {
        self.color = color;
    }

    /// Closes the editor on success; a rejected submit leaves the form untouched.
    pub fn submit(&mut self) -> Result<EditorCommand, SubmitRejection> {
        if !self.is_open() {
            return Err(SubmitRejection::Closed);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SubmitRejection::EmptyTitle);
        }
        let Some(date) = self.target_date else {
            return Err(SubmitRejection::MissingDate);
        };

        let data = EventData {
            title: title.to_string(),
            date,
            time: normalize_time(&self.time),
            color: self.color,
            description: self.description.clone(),
        };

        let command = match &self.state {
            EditorState::Edit(original) => EditorCommand::Update {
                id: original.id.clone(),
                data: EventData { date: original.date, ..data },
            },
            _ => EditorCommand::Create(data),
        };

        self.close();
        Ok(command)
    }

    pub fn request_delete(&mut self) -> Option<EditorCommand> {
        let id = self.editing_id()?.to_string();
        self.close();
        Some(EditorCommand::Delete(id))
    }
}

/// Turns loose time entry into `HH:MM`. Empty input stays empty; hours clamp
/// to 23 and minutes to 59.
pub fn normalize_time(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    let (hour, minute) = if let Some((h, m)) = input.split_once(':') {
        let m: String = m.chars().filter(|c| c.is_ascii_digit()).take(2).collect();
        if h.is_empty() && m.is_empty() {
            return String::new();
        }
        (parse_or_zero(h), parse_or_zero(&m))
    } else {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
        match digits.len() {
            0 => return String::new(),
            1 | 2 => (parse_or_zero(&digits), 0),
            _ => {
                let num = parse_or_zero(&digits);
                (num / 100, num % 100)
            }
        }
    };

    format!("{:02}:{:02}", hour.min(23), minute.min(59))
}

fn parse_or_zero(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}
