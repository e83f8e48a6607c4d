//! Theme system for TUI colors and styles
//!
//! Status colors follow the CLI's `format_status_colored`.

use iocraft::prelude::Color;

use crate::controller::MessageLevel;
use crate::display::{StatusTone, status_tone};

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

#[derive(Debug, Clone)]
pub struct Theme {
    pub status_positive: Color,
    pub status_pending: Color,
    pub status_negative: Color,
    pub status_neutral: Color,

    pub message_info: Color,
    pub message_error: Color,

    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
    pub tab_active: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_positive: Color::Green,
            status_pending: Color::Yellow,
            status_negative: Color::Red,
            status_neutral: GRAY,

            message_info: Color::Green,
            message_error: Color::Red,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            id_color: Color::Cyan,
            tab_active: Color::Cyan,
        }
    }
}

impl Theme {
    /// Color for a server-assigned claim or payment status
    pub fn status_color(&self, status: &str) -> Color {
        match status_tone(status) {
            StatusTone::Positive => self.status_positive,
            StatusTone::Pending => self.status_pending,
            StatusTone::Negative => self.status_negative,
            StatusTone::Neutral => self.status_neutral,
        }
    }

    pub fn message_color(&self, level: MessageLevel) -> Color {
        match level {
            MessageLevel::Info => self.message_info,
            MessageLevel::Error => self.message_error,
        }
    }
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color() {
        let theme = Theme::default();
        assert!(matches!(theme.status_color("APPROVED"), Color::Green));
        assert!(matches!(theme.status_color("PENDING"), Color::Yellow));
        assert!(matches!(theme.status_color("REJECTED"), Color::Red));
    }
}
