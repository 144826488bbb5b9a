use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub color: EventColor,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventData {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub color: EventColor,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventColor {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Pink,
    Cyan,
    Lime,
}

impl EventColor {
    pub const PALETTE: [EventColor; 8] = [
        EventColor::Blue,
        EventColor::Red,
        EventColor::Green,
        EventColor::Yellow,
        EventColor::Purple,
        EventColor::Pink,
        EventColor::Cyan,
        EventColor::Lime,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            EventColor::Blue => "#3b82f6",
            EventColor::Red => "#ef4444",
            EventColor::Green => "#10b981",
            EventColor::Yellow => "#f59e0b",
            EventColor::Purple => "#8b5cf6",
            EventColor::Pink => "#ec4899",
            EventColor::Cyan => "#06b6d4",
            EventColor::Lime => "#84cc16",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            EventColor::Blue => (0x3b, 0x82, 0xf6),
            EventColor::Red => (0xef, 0x44, 0x44),
            EventColor::Green => (0x10, 0xb9, 0x81),
            EventColor::Yellow => (0xf5, 0x9e, 0x0b),
            EventColor::Purple => (0x8b, 0x5c, 0xf6),
            EventColor::Pink => (0xec, 0x48, 0x99),
            EventColor::Cyan => (0x06, 0xb6, 0xd4),
            EventColor::Lime => (0x84, 0xcc, 0x16),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Red => "Red",
            EventColor::Green => "Green",
            EventColor::Yellow => "Yellow",
            EventColor::Purple => "Purple",
            EventColor::Pink => "Pink",
            EventColor::Cyan => "Cyan",
            EventColor::Lime => "Lime",
        }
    }

    pub fn index(self) -> usize {
        Self::PALETTE
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::PALETTE.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::PALETTE[(self.index() + 1) % Self::PALETTE.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::PALETTE.len();
        Self::PALETTE[(self.index() + len - 1) % len]
    }
}

impl Event {
    pub fn from_data(id: String, data: EventData) -> Self {
        Self {
            id,
            title: data.title,
            date: data.date,
            time: data.time,
            color: data.color,
            description: data.description,
        }
    }

    pub fn data(&self) -> EventData {
        EventData {
            title: self.title.clone(),
            date: self.date,
            time: self.time.clone(),
            color: self.color,
            description: self.description.clone(),
        }
    }

    pub fn has_time(&self) -> bool {
        !self.time.is_empty()
    }
}
