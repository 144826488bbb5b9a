use monthcal::{
    app::AppState,
    calendar::WEEKDAY_LABELS,
    ui::{
        geometry::GridGeometry,
        month_view::{self, DayCell, EventChip},
        theme::Theme,
    },
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let layout = month_view::calculate_layout(app);
    let geometry = GridGeometry::compute(area);

    for (label, rect) in WEEKDAY_LABELS.iter().zip(&geometry.weekday_labels) {
        f.render_widget(
            Paragraph::new(*label)
                .style(Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            *rect,
        );
    }

    for (cell, rect) in layout.cells().zip(&geometry.cells) {
        render_cell(f, app, cell, *rect);
    }
}

fn render_cell(f: &mut Frame, app: &AppState, cell: &DayCell, area: Rect) {
    let border_style = if cell.is_selected {
        Style::default().fg(app.theme.cursor_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.cell_border)
    };
    f.render_widget(
        Block::default().borders(Borders::ALL).border_style(border_style),
        area,
    );

    let inner = GridGeometry::cell_inner(area);
    let date_line = GridGeometry::date_line(inner);
    if date_line.area() == 0 {
        return;
    }

    f.render_widget(
        Paragraph::new(format!(" {} ", cell.day_label())).style(day_number_style(&app.theme, cell)),
        date_line,
    );

    if let Some(overflow) = cell.overflow_label() {
        let width = (overflow.chars().count() as u16).min(date_line.width);
        let slot = Rect {
            x: date_line.right() - width,
            width,
            ..date_line
        };
        f.render_widget(
            Paragraph::new(overflow).style(Style::default().fg(app.theme.overflow)),
            slot,
        );
    }

    for (chip, rect) in cell.chips.iter().zip(GridGeometry::chip_rects(inner, &cell.chips)) {
        render_chip(f, &app.theme, chip, rect);
    }
}

fn day_number_style(theme: &Theme, cell: &DayCell) -> Style {
    let style = if cell.is_today {
        Style::default()
            .fg(theme.today_fg)
            .bg(theme.today_bg)
            .add_modifier(Modifier::BOLD)
    } else if !cell.is_current_month {
        Style::default().fg(theme.inactive_day)
    } else {
        Style::default().fg(theme.day_number)
    };

    if cell.is_selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_chip(f: &mut Frame, theme: &Theme, chip: &EventChip, area: Rect) {
    let mut style = Style::default()
        .fg(theme.chip_text)
        .bg(Theme::event_color(chip.color));
    if chip.is_focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![Line::from(chip.title.clone())];
    if let Some(time) = &chip.time {
        lines.push(Line::from(time.clone()));
    }

    f.render_widget(Paragraph::new(lines).style(style), area);
}
