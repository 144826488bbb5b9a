use ratatui::style::Color;

use crate::calendar::EventColor;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub header_button: Color,
    pub primary_button: Color,
    pub weekday_header: Color,
    pub cell_border: Color,
    pub day_number: Color,
    pub inactive_day: Color,
    pub today_fg: Color,
    pub today_bg: Color,
    pub cursor_bg: Color,
    pub chip_text: Color,
    pub overflow: Color,
    pub status_bar: Color,
    pub command_mode: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub modal_bg: Color,
    pub field_active: Color,
    pub field_inactive: Color,
    pub danger: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            header_button: Color::White,
            primary_button: Color::Rgb(37, 99, 235),
            weekday_header: Color::Gray,
            cell_border: Color::DarkGray,
            day_number: Color::White,
            inactive_day: Color::DarkGray,
            today_fg: Color::White,
            today_bg: Color::Rgb(37, 99, 235),
            cursor_bg: Color::Rgb(55, 65, 81),
            chip_text: Color::White,
            overflow: Color::Gray,
            status_bar: Color::White,
            command_mode: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            modal_bg: Color::Black,
            field_active: Color::Cyan,
            field_inactive: Color::DarkGray,
            danger: Color::Rgb(220, 38, 38),
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            header_button: Color::Rgb(235, 219, 178),
            primary_button: Color::Rgb(69, 133, 136),
            weekday_header: Color::Rgb(254, 128, 25),
            cell_border: Color::Rgb(80, 73, 69),
            day_number: Color::Rgb(235, 219, 178),
            inactive_day: Color::Rgb(146, 131, 116),
            today_fg: Color::Rgb(40, 40, 40),
            today_bg: Color::Rgb(184, 187, 38),
            cursor_bg: Color::Rgb(60, 56, 54),
            chip_text: Color::Rgb(40, 40, 40),
            overflow: Color::Rgb(168, 153, 132),
            status_bar: Color::Rgb(235, 219, 178),
            command_mode: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            modal_bg: Color::Rgb(40, 40, 40),
            field_active: Color::Rgb(250, 189, 47),
            field_inactive: Color::Rgb(146, 131, 116),
            danger: Color::Rgb(251, 73, 52),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            header_button: Color::Rgb(216, 222, 233),
            primary_button: Color::Rgb(94, 129, 172),
            weekday_header: Color::Rgb(235, 203, 139),
            cell_border: Color::Rgb(67, 76, 94),
            day_number: Color::Rgb(236, 239, 244),
            inactive_day: Color::Rgb(76, 86, 106),
            today_fg: Color::Rgb(46, 52, 64),
            today_bg: Color::Rgb(163, 190, 140),
            cursor_bg: Color::Rgb(59, 66, 82),
            chip_text: Color::Rgb(236, 239, 244),
            overflow: Color::Rgb(129, 161, 193),
            status_bar: Color::Rgb(216, 222, 233),
            command_mode: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            modal_bg: Color::Rgb(46, 52, 64),
            field_active: Color::Rgb(136, 192, 208),
            field_inactive: Color::Rgb(76, 86, 106),
            danger: Color::Rgb(191, 97, 106),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            header_button: Color::Rgb(248, 248, 242),
            primary_button: Color::Rgb(189, 147, 249),
            weekday_header: Color::Rgb(241, 250, 140),
            cell_border: Color::Rgb(68, 71, 90),
            day_number: Color::Rgb(248, 248, 242),
            inactive_day: Color::Rgb(98, 114, 164),
            today_fg: Color::Rgb(40, 42, 54),
            today_bg: Color::Rgb(80, 250, 123),
            cursor_bg: Color::Rgb(68, 71, 90),
            chip_text: Color::Rgb(248, 248, 242),
            overflow: Color::Rgb(255, 121, 198),
            status_bar: Color::Rgb(248, 248, 242),
            command_mode: Color::Rgb(248, 248, 242),
            help_title: Color::Rgb(139, 233, 253),
            help_section: Color::Rgb(241, 250, 140),
            modal_bg: Color::Rgb(40, 42, 54),
            field_active: Color::Rgb(255, 121, 198),
            field_inactive: Color::Rgb(98, 114, 164),
            danger: Color::Rgb(255, 85, 85),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            title: Color::Rgb(38, 139, 210),
            header_button: Color::Rgb(147, 161, 161),
            primary_button: Color::Rgb(38, 139, 210),
            weekday_header: Color::Rgb(181, 137, 0),
            cell_border: Color::Rgb(7, 54, 66),
            day_number: Color::Rgb(147, 161, 161),
            inactive_day: Color::Rgb(88, 110, 117),
            today_fg: Color::Rgb(0, 43, 54),
            today_bg: Color::Rgb(133, 153, 0),
            cursor_bg: Color::Rgb(7, 54, 66),
            chip_text: Color::Rgb(253, 246, 227),
            overflow: Color::Rgb(42, 161, 152),
            status_bar: Color::Rgb(147, 161, 161),
            command_mode: Color::Rgb(147, 161, 161),
            help_title: Color::Rgb(38, 139, 210),
            help_section: Color::Rgb(181, 137, 0),
            modal_bg: Color::Rgb(0, 43, 54),
            field_active: Color::Rgb(42, 161, 152),
            field_inactive: Color::Rgb(88, 110, 117),
            danger: Color::Rgb(220, 50, 47),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            title: Color::Rgb(102, 217, 239),
            header_button: Color::Rgb(248, 248, 240),
            primary_button: Color::Rgb(102, 217, 239),
            weekday_header: Color::Rgb(230, 219, 116),
            cell_border: Color::Rgb(73, 72, 62),
            day_number: Color::Rgb(248, 248, 240),
            inactive_day: Color::Rgb(117, 113, 94),
            today_fg: Color::Rgb(39, 40, 34),
            today_bg: Color::Rgb(166, 226, 46),
            cursor_bg: Color::Rgb(73, 72, 62),
            chip_text: Color::Rgb(248, 248, 240),
            overflow: Color::Rgb(174, 129, 255),
            status_bar: Color::Rgb(248, 248, 240),
            command_mode: Color::Rgb(248, 248, 240),
            help_title: Color::Rgb(102, 217, 239),
            help_section: Color::Rgb(230, 219, 116),
            modal_bg: Color::Rgb(39, 40, 34),
            field_active: Color::Rgb(249, 38, 114),
            field_inactive: Color::Rgb(117, 113, 94),
            danger: Color::Rgb(249, 38, 114),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "solarized-dark" | "solarized" => Self::solarized_dark(),
            "monokai" => Self::monokai(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula", "solarized-dark", "monokai"]
    }

    pub fn event_color(color: EventColor) -> Color {
        let (r, g, b) = color.rgb();
        Color::Rgb(r, g, b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
