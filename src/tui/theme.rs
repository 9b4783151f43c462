//! # Palette
//!
//! Applies the theme setting to the terminal: every widget takes its colors
//! from a `Palette` instead of hardcoding them.

use ratatui::style::{Color, Modifier, Style};

use crate::core::catalog::Difficulty;
use crate::core::settings::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub beginner: Color,
    pub intermediate: Color,
    pub advanced: Color,
}

const LIGHT: Palette = Palette {
    fg: Color::Black,
    bg: Color::White,
    muted: Color::DarkGray,
    accent: Color::Blue,
    border: Color::Gray,
    selected_fg: Color::White,
    selected_bg: Color::Blue,
    beginner: Color::Green,
    intermediate: Color::Rgb(176, 120, 0),
    advanced: Color::Red,
};

const DARK: Palette = Palette {
    fg: Color::Gray,
    bg: Color::Reset,
    muted: Color::DarkGray,
    accent: Color::Cyan,
    border: Color::DarkGray,
    selected_fg: Color::Black,
    selected_bg: Color::Cyan,
    beginner: Color::Green,
    intermediate: Color::Yellow,
    advanced: Color::LightRed,
};

impl Palette {
    /// `System` follows the terminal background reported in `COLORFGBG`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
            Theme::System => {
                if terminal_is_light(std::env::var("COLORFGBG").ok().as_deref()) {
                    LIGHT
                } else {
                    DARK
                }
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn difficulty(&self, tier: Difficulty) -> Style {
        let color = match tier {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        };
        Style::default().fg(color)
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); background 7 or 15 is light.
fn terminal_is_light(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}
