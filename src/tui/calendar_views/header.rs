use monthcal::{
    app::AppState,
    ui::{
        geometry::HeaderLayout,
        header::{HeaderAction, APP_TITLE},
    },
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let layout = HeaderLayout::compute(area);
    let bold = Modifier::BOLD;

    f.render_widget(
        Paragraph::new(APP_TITLE).style(Style::default().fg(app.theme.title).add_modifier(bold)),
        layout.title,
    );

    for action in HeaderAction::ALL {
        let color = match action {
            HeaderAction::CreateEvent => app.theme.primary_button,
            _ => app.theme.header_button,
        };
        f.render_widget(
            Paragraph::new(action.label()).style(Style::default().fg(color)),
            layout.button(action),
        );
    }

    f.render_widget(
        Paragraph::new(app.month_label())
            .style(Style::default().fg(app.theme.title).add_modifier(bold))
            .alignment(Alignment::Center),
        layout.label,
    );
}
