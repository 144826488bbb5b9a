use chrono::NaiveDate;
use uuid::Uuid;

use super::event::{Event, EventData};

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.date == date)
            .collect()
    }

    pub fn add_event(&mut self, data: EventData) -> &Event {
        let id = self.fresh_id();
        tracing::debug!("Adding event {} on {}", id, data.date);
        let index = self.events.len();
        self.events.push(Event::from_data(id, data));
        &self.events[index]
    }

    /// Returns `false` for an unknown id.
    pub fn update_event(&mut self, id: &str, data: EventData) -> bool {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                *event = Event::from_data(id.to_string(), data);
                tracing::debug!("Updated event {}", id);
                true
            }
            None => {
                tracing::warn!("Ignoring update for unknown event {}", id);
                false
            }
        }
    }

    pub fn delete_event(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;
        if removed {
            tracing::debug!("Deleted event {}", id);
        } else {
            tracing::warn!("Ignoring delete for unknown event {}", id);
        }
        removed
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventColor;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn data(title: &str, on: NaiveDate) -> EventData {
        EventData {
            title: title.to_string(),
            date: on,
            time: String::new(),
            color: EventColor::Blue,
            description: String::new(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_event_assigns_unique_ids() {
        let mut store = EventStore::new();
        let day = date(2025, 3, 14);
        let first = store.add_event(data("One", day)).id.clone();
        let second = store.add_event(data("Two", day)).id.clone();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_round_trip_is_visible_on_its_day() {
        let mut store = EventStore::new();
        let day = date(2025, 3, 14);
        store.add_event(data("Existing", day));
        let existing_ids: Vec<String> = store.iter().map(|e| e.id.clone()).collect();

        let created = store
            .add_event(EventData {
                title: "T".to_string(),
                date: day,
                time: "09:00".to_string(),
                color: EventColor::Purple,
                description: String::new(),
            })
            .clone();

        let matches: Vec<&Event> = store
            .events_for_date(day)
            .into_iter()
            .filter(|e| e.title == "T")
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].time, "09:00");
        assert_eq!(matches[0].color, EventColor::Purple);
        assert!(!existing_ids.contains(&created.id));
    }

    #[test]
    fn events_for_date_keeps_insertion_order() {
        let mut store = EventStore::new();
        let day = date(2025, 1, 15);
        store.add_event(data("First", day));
        store.add_event(data("Other day", date(2025, 1, 16)));
        store.add_event(data("Second", day));

        let titles: Vec<&str> = store
            .events_for_date(day)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn update_event_preserves_id_and_replaces_fields() {
        let mut store = EventStore::new();
        let id = store.add_event(data("Old", date(2025, 1, 15))).id.clone();

        let mut replacement = data("New", date(2025, 1, 15));
        replacement.time = "18:00".to_string();
        replacement.color = EventColor::Red;
        assert!(store.update_event(&id, replacement.clone()));

        let stored = store.get(&id).unwrap();
        assert_eq!(stored, &Event::from_data(id.clone(), replacement));
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = EventStore::new();
        store.add_event(data("Keep", date(2025, 1, 15)));
        let before: Vec<Event> = store.iter().cloned().collect();

        assert!(!store.update_event("missing", data("Nope", date(2025, 1, 1))));

        let after: Vec<Event> = store.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn delete_removes_event_from_its_day() {
        let mut store = EventStore::new();
        let day = date(2025, 2, 2);
        let id = store.add_event(data("Gone", day)).id.clone();
        store.add_event(data("Stays", day));

        assert!(store.delete_event(&id));

        let remaining = store.events_for_date(day);
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|e| e.id != id));
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut store = EventStore::new();
        store.add_event(data("Keep", date(2025, 2, 2)));

        assert!(!store.delete_event("missing"));
        assert_eq!(store.len(), 1);
    }

    proptest! {
        #[test]
        fn events_for_date_returns_exactly_matching_events(
            offsets in proptest::collection::vec(0u64..10, 0..30),
            query in 0u64..10,
        ) {
            let base = date(2025, 1, 1);
            let mut store = EventStore::new();
            for (i, offset) in offsets.iter().enumerate() {
                let on = base.checked_add_days(chrono::Days::new(*offset)).unwrap();
                store.add_event(data(&format!("e{}", i), on));
            }
            let query_date = base.checked_add_days(chrono::Days::new(query)).unwrap();

            let found: Vec<String> = store
                .events_for_date(query_date)
                .iter()
                .map(|e| e.id.clone())
                .collect();
            let expected: Vec<String> = store
                .iter()
                .filter(|e| e.date == query_date)
                .map(|e| e.id.clone())
                .collect();

            prop_assert_eq!(found.len(), offsets.iter().filter(|o| **o == query).count());
            prop_assert_eq!(found, expected);
        }
    }
}
