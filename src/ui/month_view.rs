use chrono::{Datelike, NaiveDate};

use crate::app::AppState;
use crate::calendar::{grid, Event, EventColor};

pub const MAX_VISIBLE_CHIPS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub reference: NaiveDate,
    pub label: String,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventChip {
    pub event_id: String,
    pub title: String,
    pub time: Option<String>,
    pub color: EventColor,
    pub is_focused: bool,
}

impl EventChip {
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            title: event.title.clone(),
            time: event.has_time().then(|| event.time.clone()),
            color: event.color,
            is_focused: false,
        }
    }

    pub fn height(&self) -> u16 {
        if self.time.is_some() { 2 } else { 1 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_current_month: bool,
    pub chips: Vec<EventChip>,
    pub overflow: usize,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            is_current_month: true,
            chips: Vec::new(),
            overflow: 0,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }

    pub fn with_events(mut self, events: &[&Event]) -> Self {
        self.chips = events
            .iter()
            .take(MAX_VISIBLE_CHIPS)
            .map(|event| EventChip::from_event(event))
            .collect();
        self.overflow = events.len().saturating_sub(MAX_VISIBLE_CHIPS);
        self
    }

    pub fn with_focused_chip(mut self, index: Option<usize>) -> Self {
        for (i, chip) in self.chips.iter_mut().enumerate() {
            chip.is_focused = Some(i) == index;
        }
        self
    }

    pub fn day_label(&self) -> String {
        self.date.day().to_string()
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

impl MonthLayout {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn cell(&self, index: usize) -> Option<&DayCell> {
        self.cells().nth(index)
    }
}

pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let reference = state.current_date;

    let weeks = grid::generate_grid(reference)
        .chunks(grid::DAYS_PER_WEEK)
        .map(|dates| Week {
            days: dates
                .iter()
                .map(|&date| {
                    let is_selected = date == state.current_date;
                    DayCell::new(date)
                        .with_selected(is_selected)
                        .with_today(date == state.today)
                        .with_current_month(grid::is_same_month(date, reference))
                        .with_events(&state.events_for_date(date))
                        .with_focused_chip(if is_selected { state.focused_chip } else { None })
                })
                .collect(),
        })
        .collect();

    MonthLayout {
        reference,
        label: grid::month_label(reference),
        weeks,
    }
}
