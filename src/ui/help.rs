use ratatui::layout::Rect;

use crate::ui::geometry::{centered_rect, HELP_HEIGHT, HELP_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpLine {
    Title(&'static str),
    Section(&'static str),
    Entry(&'static str),
    Blank,
}

pub const HELP_LINES: &[HelpLine] = &[
    HelpLine::Title("Calendar Help"),
    HelpLine::Blank,
    HelpLine::Section("Navigation:"),
    HelpLine::Entry("  h/l      - Previous/next day"),
    HelpLine::Entry("  j/k      - Next/previous week"),
    HelpLine::Entry("  [{ / ]}  - Previous/next month"),
    HelpLine::Entry("  t        - Jump to today"),
    HelpLine::Blank,
    HelpLine::Section("Events:"),
    HelpLine::Entry("  Tab      - Cycle events on the selected day"),
    HelpLine::Entry("  Enter    - Edit focused event, or create one"),
    HelpLine::Entry("  a        - Add event on the selected day"),
    HelpLine::Entry("  c        - Create event for today"),
    HelpLine::Entry("  Mouse    - Click a day to create, an event to edit"),
    HelpLine::Blank,
    HelpLine::Section("Editor:"),
    HelpLine::Entry("  Tab/S-Tab - Next/previous field"),
    HelpLine::Entry("  Left/Right or 1-8 - Pick color"),
    HelpLine::Entry("  Enter    - Save (or press focused button)"),
    HelpLine::Entry("  Esc      - Cancel"),
    HelpLine::Blank,
    HelpLine::Section("Commands:"),
    HelpLine::Entry("  :q       - Quit"),
    HelpLine::Entry("  :today   - Jump to today"),
    HelpLine::Entry("  :goto    - Jump to date (:goto 2025-12-25)"),
    HelpLine::Entry("  :new     - Create event (:new [title])"),
    HelpLine::Entry("  :theme   - Change theme (:theme gruvbox)"),
    HelpLine::Entry("  :help    - Show this help"),
    HelpLine::Blank,
];

pub fn help_area(screen: Rect) -> Rect {
    centered_rect(screen, HELP_WIDTH, HELP_HEIGHT)
}

pub fn visible_lines(screen: Rect) -> usize {
    help_area(screen).height.saturating_sub(2) as usize
}

pub fn max_scroll(screen: Rect) -> usize {
    HELP_LINES.len().saturating_sub(visible_lines(screen))
}
