use monthcal::{
    app::AppState,
    calendar::EventColor,
    editor::FormField,
    ui::{
        geometry::{button_label, EditorLayout},
        theme::Theme,
    },
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &AppState) {
    let editor = &app.editor;
    if !editor.is_open() {
        return;
    }

    let layout = EditorLayout::compute(f.size(), editor);
    let theme = &app.theme;

    f.render_widget(Clear, layout.area);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", editor.heading()))
            .title_style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(theme.modal_bg)),
        layout.area,
    );

    let label = |text: &'static str, field: Option<FormField>| {
        let active = field.is_some_and(|field| field == editor.active_field);
        let color = if active { theme.field_active } else { theme.field_inactive };
        Paragraph::new(text).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    f.render_widget(label("Title *", Some(FormField::Title)), layout.title_label);
    f.render_widget(
        input_line(theme, &editor.title, "Event title", editor.active_field == FormField::Title),
        layout.title,
    );

    f.render_widget(label("Date", None), layout.date_label);
    let date_text = editor
        .target_date()
        .map(|date| app.format_date(date))
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(date_text).style(Style::default().fg(theme.field_inactive)),
        layout.date,
    );

    f.render_widget(label("Time", Some(FormField::Time)), layout.time_label);
    f.render_widget(
        input_line(theme, &editor.time, "HH:MM", editor.active_field == FormField::Time),
        layout.time,
    );

    f.render_widget(label("Description", Some(FormField::Description)), layout.description_label);
    f.render_widget(
        input_line(
            theme,
            &editor.description,
            "Event description (optional)",
            editor.active_field == FormField::Description,
        ),
        layout.description,
    );

    let color_heading = format!("Color ({})", editor.color.name());
    let color_active = editor.active_field == FormField::Color;
    f.render_widget(
        Paragraph::new(color_heading).style(
            Style::default()
                .fg(if color_active { theme.field_active } else { theme.field_inactive })
                .add_modifier(Modifier::BOLD),
        ),
        layout.color_label,
    );
    for (color, rect) in EventColor::PALETTE.iter().zip(&layout.swatches) {
        render_swatch(f, *color, *color == editor.color, *rect);
    }

    render_button(f, theme, editor.submit_label(), theme.primary_button, editor.active_field == FormField::Save, layout.save);
    render_button(f, theme, "Cancel", theme.header_button, editor.active_field == FormField::Cancel, layout.cancel);
    if let Some(delete) = layout.delete {
        render_button(f, theme, "Delete", theme.danger, editor.active_field == FormField::Delete, delete);
    }

    if app.show_hints {
        let key = |k: &'static str, color: Color| Span::styled(k, Style::default().fg(color));
        f.render_widget(
            Paragraph::new(Line::from(vec![
                key("Tab", theme.field_active),
                Span::raw(" = Next field | "),
                key("Enter", theme.primary_button),
                Span::raw(" = Save | "),
                key("Esc", theme.danger),
                Span::raw(" = Cancel"),
            ]))
            .style(Style::default().fg(theme.field_inactive)),
            layout.hint,
        );
    }
}

fn input_line<'a>(theme: &Theme, value: &'a str, placeholder: &'a str, active: bool) -> Paragraph<'a> {
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            placeholder,
            Style::default().fg(theme.field_inactive).add_modifier(Modifier::DIM),
        )]
    } else {
        vec![Span::raw(value)]
    };
    if active {
        spans.push(Span::styled("_", Style::default().fg(theme.field_active)));
    }
    Paragraph::new(Line::from(spans))
}

fn render_swatch(f: &mut Frame, color: EventColor, selected: bool, area: Rect) {
    let marker = if selected { " ✓ " } else { "" };
    let mut style = Style::default().bg(Theme::event_color(color)).fg(Color::White);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    f.render_widget(Paragraph::new(marker).style(style), area);
}

fn render_button(f: &mut Frame, theme: &Theme, text: &str, color: Color, focused: bool, area: Rect) {
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if focused {
        style = style.fg(theme.modal_bg).bg(color);
    }
    f.render_widget(Paragraph::new(button_label(text)).style(style), area);
}
