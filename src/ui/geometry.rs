use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::calendar::{grid, EventColor};
use crate::editor::{EventEditor, FormField};
use crate::ui::header::{HeaderAction, APP_TITLE};
use crate::ui::month_view::{EventChip, MonthLayout};

pub const MONTH_LABEL_WIDTH: u16 = 20;
pub const EDITOR_WIDTH: u16 = 60;
pub const EDITOR_HEIGHT: u16 = 16;
pub const HELP_WIDTH: u16 = 60;
pub const HELP_HEIGHT: u16 = 24;
pub const SWATCH_WIDTH: u16 = 4;

const BORDER: Margin = Margin { horizontal: 1, vertical: 1 };

pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && y >= rect.y
        && u32::from(x) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(y) < u32::from(rect.y) + u32::from(rect.height)
}

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn button_label(text: &str) -> String {
    format!("[ {} ]", text)
}

fn label_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

fn row(inner: Rect, n: u16) -> Rect {
    if n >= inner.height {
        return Rect { x: inner.x, y: inner.bottom(), width: 0, height: 0 };
    }
    Rect { x: inner.x, y: inner.y + n, width: inner.width, height: 1 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub grid: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            header: chunks[0],
            grid: chunks[1],
            status: chunks[2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderLayout {
    pub title: Rect,
    pub today: Rect,
    pub prev: Rect,
    pub label: Rect,
    pub next: Rect,
    pub create: Rect,
}

impl HeaderLayout {
    pub fn compute(header: Rect) -> Self {
        let inner = header.inner(&BORDER);
        let line = |x: u16, width: u16| {
            Rect { x, y: inner.y, width, height: inner.height.min(1) }.intersection(inner)
        };

        let title = line(inner.x, label_width(APP_TITLE));
        let today = line(title.right() + 2, HeaderAction::Today.width());

        let create_width = HeaderAction::CreateEvent.width();
        let create_x = inner.right().saturating_sub(create_width);
        let next_x = create_x.saturating_sub(2 + HeaderAction::NextMonth.width());
        let label_x = next_x.saturating_sub(MONTH_LABEL_WIDTH);
        let prev_x = label_x.saturating_sub(HeaderAction::PreviousMonth.width());

        Self {
            title,
            today,
            prev: line(prev_x, HeaderAction::PreviousMonth.width()),
            label: line(label_x, MONTH_LABEL_WIDTH),
            next: line(next_x, HeaderAction::NextMonth.width()),
            create: line(create_x, create_width),
        }
    }

    pub fn button(&self, action: HeaderAction) -> Rect {
        match action {
            HeaderAction::Today => self.today,
            HeaderAction::PreviousMonth => self.prev,
            HeaderAction::NextMonth => self.next,
            HeaderAction::CreateEvent => self.create,
        }
    }

    pub fn action_at(&self, x: u16, y: u16) -> Option<HeaderAction> {
        HeaderAction::ALL
            .into_iter()
            .find(|action| contains(self.button(*action), x, y))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridHit {
    Chip(String),
    Day(chrono::NaiveDate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub weekday_labels: Vec<Rect>,
    pub cells: Vec<Rect>,
}

impl GridGeometry {
    pub fn compute(area: Rect) -> Self {
        let header_height = area.height.min(1);
        let body = Rect {
            x: area.x,
            y: area.y + header_height,
            width: area.width,
            height: area.height - header_height,
        };

        let columns = split_evenly(body.x, body.width, grid::DAYS_PER_WEEK);
        let rows = split_evenly(body.y, body.height, grid::GRID_WEEKS);

        let weekday_labels = columns
            .iter()
            .map(|&(x, width)| Rect { x, y: area.y, width, height: header_height })
            .collect();

        let cells = rows
            .iter()
            .flat_map(|&(y, height)| {
                columns
                    .iter()
                    .map(move |&(x, width)| Rect { x, y, width, height })
            })
            .collect();

        Self { weekday_labels, cells }
    }

    pub fn cell_inner(cell: Rect) -> Rect {
        cell.inner(&BORDER)
    }

    pub fn date_line(inner: Rect) -> Rect {
        row(inner, 0)
    }

    /// Chips stack under the date line; a chip that only partly fits is cut
    /// short and chips below the cell bottom are left out.
    pub fn chip_rects(inner: Rect, chips: &[EventChip]) -> Vec<Rect> {
        let mut rects = Vec::new();
        let mut y = inner.y.saturating_add(1);
        for chip in chips {
            if y >= inner.bottom() {
                break;
            }
            let height = chip.height().min(inner.bottom() - y);
            rects.push(Rect { x: inner.x, y, width: inner.width, height });
            y += height;
        }
        rects
    }

    pub fn hit(&self, layout: &MonthLayout, x: u16, y: u16) -> Option<GridHit> {
        let index = self.cells.iter().position(|cell| contains(*cell, x, y))?;
        let cell = layout.cell(index)?;
        let inner = Self::cell_inner(self.cells[index]);

        let chip_hit = cell
            .chips
            .iter()
            .zip(Self::chip_rects(inner, &cell.chips))
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(chip, _)| GridHit::Chip(chip.event_id.clone()));

        Some(chip_hit.unwrap_or(GridHit::Day(cell.date)))
    }
}

fn split_evenly(start: u16, length: u16, parts: usize) -> Vec<(u16, u16)> {
    let length = u32::from(length);
    let parts = parts as u32;
    (0..parts)
        .map(|i| {
            let from = length * i / parts;
            let to = length * (i + 1) / parts;
            (start + from as u16, (to - from) as u16)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorHit {
    Field(FormField),
    Swatch(EventColor),
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorLayout {
    pub area: Rect,
    pub title_label: Rect,
    pub title: Rect,
    pub date_label: Rect,
    pub date: Rect,
    pub time_label: Rect,
    pub time: Rect,
    pub description_label: Rect,
    pub description: Rect,
    pub color_label: Rect,
    pub swatches: Vec<Rect>,
    pub save: Rect,
    pub cancel: Rect,
    pub delete: Option<Rect>,
    pub hint: Rect,
}

impl EditorLayout {
    pub fn compute(screen: Rect, editor: &EventEditor) -> Self {
        let area = centered_rect(screen, EDITOR_WIDTH, EDITOR_HEIGHT);
        let inner = area.inner(&BORDER);

        let swatch_row = row(inner, 9);
        let swatches = (0..EventColor::PALETTE.len() as u16)
            .map(|i| {
                Rect {
                    x: swatch_row.x + i * (SWATCH_WIDTH + 1),
                    width: SWATCH_WIDTH,
                    ..swatch_row
                }
                .intersection(swatch_row)
            })
            .collect();

        let buttons = row(inner, 11);
        let save_width = label_width(&button_label(editor.submit_label()));
        let cancel_width = label_width(&button_label("Cancel"));
        let save_x = buttons.right().saturating_sub(save_width).max(buttons.x);
        let cancel_x = save_x.saturating_sub(cancel_width + 1).max(buttons.x);
        let save = Rect { x: save_x, width: save_width, ..buttons }.intersection(buttons);
        let cancel = Rect { x: cancel_x, width: cancel_width, ..buttons }.intersection(buttons);
        let delete = editor.is_editing().then(|| {
            Rect { width: label_width(&button_label("Delete")), ..buttons }.intersection(buttons)
        });

        Self {
            area,
            title_label: row(inner, 0),
            title: row(inner, 1),
            date_label: row(inner, 2),
            date: row(inner, 3),
            time_label: row(inner, 4),
            time: row(inner, 5),
            description_label: row(inner, 6),
            description: row(inner, 7),
            color_label: row(inner, 8),
            swatches,
            save,
            cancel,
            delete,
            hint: row(inner, 13),
        }
    }

    pub fn hit(&self, x: u16, y: u16) -> EditorHit {
        if !contains(self.area, x, y) {
            return EditorHit::Outside;
        }

        if let Some(index) = self.swatches.iter().position(|r| contains(*r, x, y)) {
            return EventColor::from_index(index)
                .map(EditorHit::Swatch)
                .unwrap_or(EditorHit::Inside);
        }

        let mut targets = vec![
            (self.title_label, FormField::Title),
            (self.title, FormField::Title),
            (self.time_label, FormField::Time),
            (self.time, FormField::Time),
            (self.description_label, FormField::Description),
            (self.description, FormField::Description),
            (self.color_label, FormField::Color),
            (self.save, FormField::Save),
            (self.cancel, FormField::Cancel),
        ];
        if let Some(delete) = self.delete {
            targets.push((delete, FormField::Delete));
        }

        targets
            .into_iter()
            .find(|(rect, _)| contains(*rect, x, y))
            .map(|(_, field)| EditorHit::Field(field))
            .unwrap_or(EditorHit::Inside)
    }
}
