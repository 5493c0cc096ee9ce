//! Reading palettes for the app themes.

use ratatui::style::{Color, Style};

use crate::domain::preferences::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(250, 250, 250),
                text: Color::Rgb(30, 30, 30),
                accent: Color::Rgb(37, 99, 235),
            },
            Theme::Dark => Self {
                background: Color::Rgb(24, 24, 27),
                text: Color::Rgb(228, 228, 231),
                accent: Color::Rgb(96, 165, 250),
            },
            Theme::Sepia => Self {
                background: Color::Rgb(244, 236, 216),
                text: Color::Rgb(91, 70, 54),
                accent: Color::Rgb(180, 83, 9),
            },
        }
    }

    pub fn page(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }
}
