use ratatui::layout::Rect;

use crate::app::{AppState, Message};
use crate::editor::FormField;
use crate::ui::geometry::{
    EditorHit, EditorLayout, GridGeometry, GridHit, HeaderLayout, ScreenLayout,
};
use crate::ui::month_view;

pub fn handle_click(x: u16, y: u16, screen: Rect, state: &AppState) -> Option<Message> {
    if state.show_help {
        return Some(Message::CloseHelp);
    }

    if state.editor.is_open() {
        let layout = EditorLayout::compute(screen, &state.editor);
        return match layout.hit(x, y) {
            EditorHit::Outside => Some(Message::EditorClose),
            EditorHit::Inside => None,
            EditorHit::Swatch(color) => Some(Message::EditorPickColor(color)),
            EditorHit::Field(FormField::Save) => Some(Message::EditorSubmit),
            EditorHit::Field(FormField::Cancel) => Some(Message::EditorClose),
            EditorHit::Field(FormField::Delete) => Some(Message::EditorDelete),
            EditorHit::Field(field) => Some(Message::EditorFocus(field)),
        };
    }

    let screen_layout = ScreenLayout::compute(screen);

    if let Some(action) = HeaderLayout::compute(screen_layout.header).action_at(x, y) {
        return Some(action.message());
    }

    let month = month_view::calculate_layout(state);
    match GridGeometry::compute(screen_layout.grid).hit(&month, x, y)? {
        GridHit::Chip(id) => Some(Message::EventClicked(id)),
        GridHit::Day(date) => Some(Message::DateClicked(date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventColor, EventData};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn screen() -> Rect {
        Rect::new(0, 0, 140, 50)
    }

    fn state_with_event(day: NaiveDate) -> (AppState, String) {
        let mut state = AppState::new().with_current_date(day).with_today(day);
        let id = state
            .events
            .add_event(EventData {
                title: "Click me".to_string(),
                date: day,
                time: "10:00".to_string(),
                color: EventColor::Red,
                description: String::new(),
            })
            .id
            .clone();
        (state, id)
    }

    fn cell_inner(state: &AppState, day: NaiveDate) -> Rect {
        let screen_layout = ScreenLayout::compute(screen());
        let geometry = GridGeometry::compute(screen_layout.grid);
        let month = month_view::calculate_layout(state);
        let index = month.cells().position(|c| c.date == day).unwrap();
        GridGeometry::cell_inner(geometry.cells[index])
    }

    #[test]
    fn click_on_chip_edits_event() {
        let day = date(2025, 3, 14);
        let (state, id) = state_with_event(day);
        let inner = cell_inner(&state, day);

        assert_eq!(
            handle_click(inner.x + 2, inner.y + 2, screen(), &state),
            Some(Message::EventClicked(id))
        );
    }

    #[test]
    fn click_on_empty_part_of_cell_creates() {
        let day = date(2025, 3, 14);
        let (state, _) = state_with_event(day);
        let inner = cell_inner(&state, day);

        assert_eq!(
            handle_click(inner.x, inner.y, screen(), &state),
            Some(Message::DateClicked(day))
        );
    }

    #[test]
    fn click_on_header_button_navigates() {
        let state = AppState::new();
        let header = HeaderLayout::compute(ScreenLayout::compute(screen()).header);

        assert_eq!(
            handle_click(header.prev.x, header.prev.y, screen(), &state),
            Some(Message::PreviousMonth)
        );
        assert_eq!(
            handle_click(header.create.x, header.create.y, screen(), &state),
            Some(Message::CreateEvent)
        );
    }

    #[test]
    fn click_outside_open_editor_closes_it() {
        let mut state = AppState::new();
        state.update(Message::CreateEvent);

        assert_eq!(handle_click(0, 0, screen(), &state), Some(Message::EditorClose));
    }

    #[test]
    fn click_on_editor_field_focuses_it() {
        let mut state = AppState::new();
        state.update(Message::CreateEvent);
        let layout = EditorLayout::compute(screen(), &state.editor);

        assert_eq!(
            handle_click(layout.description.x, layout.description.y, screen(), &state),
            Some(Message::EditorFocus(FormField::Description))
        );
        assert_eq!(
            handle_click(layout.save.x, layout.save.y, screen(), &state),
            Some(Message::EditorSubmit)
        );
    }

    #[test]
    fn any_click_closes_help() {
        let mut state = AppState::new();
        state.update(Message::ShowHelp);
        assert_eq!(handle_click(5, 5, screen(), &state), Some(Message::CloseHelp));
    }
}
