use monthcal::{
    app::AppState,
    ui::help::{self, HelpLine, HELP_LINES},
};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn styled_line(app: &AppState, line: HelpLine) -> Line<'static> {
    match line {
        HelpLine::Title(text) => Line::from(vec![Span::styled(
            text,
            Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD),
        )]),
        HelpLine::Section(text) => {
            Line::from(vec![Span::styled(text, Style::default().fg(app.theme.help_section))])
        }
        HelpLine::Entry(text) => Line::from(text),
        HelpLine::Blank => Line::from(""),
    }
}

pub fn render(f: &mut Frame, app: &AppState) {
    let screen = f.size();
    let help_area = help::help_area(screen);
    f.render_widget(Clear, help_area);

    let total_lines = HELP_LINES.len();
    let scroll = app.help_scroll.min(help::max_scroll(screen));

    let scrolled_text: Vec<Line> = HELP_LINES
        .iter()
        .skip(scroll)
        .take(help::visible_lines(screen))
        .map(|line| styled_line(app, *line))
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
                .style(Style::default().bg(app.theme.modal_bg)),
        )
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
