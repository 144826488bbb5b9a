use crate::app::Message;

pub const APP_TITLE: &str = "Calendar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Today,
    PreviousMonth,
    NextMonth,
    CreateEvent,
}

impl HeaderAction {
    pub const ALL: [HeaderAction; 4] = [
        HeaderAction::Today,
        HeaderAction::PreviousMonth,
        HeaderAction::NextMonth,
        HeaderAction::CreateEvent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeaderAction::Today => "[ Today ]",
            HeaderAction::PreviousMonth => "[ < ]",
            HeaderAction::NextMonth => "[ > ]",
            HeaderAction::CreateEvent => "[ + Create Event ]",
        }
    }

    pub fn width(self) -> u16 {
        self.label().chars().count() as u16
    }

    pub fn message(self) -> Message {
        match self {
            HeaderAction::Today => Message::Today,
            HeaderAction::PreviousMonth => Message::PreviousMonth,
            HeaderAction::NextMonth => Message::NextMonth,
            HeaderAction::CreateEvent => Message::CreateEvent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_maps_to_its_message() {
        let messages: Vec<Message> = HeaderAction::ALL.iter().map(|a| a.message()).collect();
        assert_eq!(
            messages,
            vec![Message::Today, Message::PreviousMonth, Message::NextMonth, Message::CreateEvent]
        );
    }

    #[test]
    fn width_counts_label_characters() {
        assert_eq!(HeaderAction::PreviousMonth.width(), 5);
        assert_eq!(HeaderAction::CreateEvent.width(), 18);
    }
}
