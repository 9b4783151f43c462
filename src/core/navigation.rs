//! # Navigation
//!
//! Closed sets of choices offered by the drawer and the dialogs, plus the
//! screens the main area can show. Everything is matched exhaustively; no
//! dynamic dispatch is needed.

use crate::core::catalog::Difficulty;

/// Drawer entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Profile,
    Progress,
    Achievements,
    Settings,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Profile,
        Destination::Progress,
        Destination::Achievements,
        Destination::Settings,
    ];

    /// The screen this destination opens, if it is a screen at all.
    /// Settings opens a dialog on top of the current screen instead.
    pub fn screen(self) -> Option<Screen> {
        match self {
            Destination::Profile => Some(Screen::Profile),
            Destination::Progress => Some(Screen::Progress),
            Destination::Achievements => Some(Screen::Achievements),
            Destination::Settings => None,
        }
    }
}

/// What the main area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Catalog,
    Profile,
    Progress,
    Achievements,
}

/// Buttons of the welcome dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeChoice {
    Beginner,
    Advanced,
    AllLevels,
}

impl WelcomeChoice {
    pub const ALL: [WelcomeChoice; 3] = [
        WelcomeChoice::Beginner,
        WelcomeChoice::Advanced,
        WelcomeChoice::AllLevels,
    ];

    /// Difficulty to filter on; `None` means the full catalog.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            WelcomeChoice::Beginner => Some(Difficulty::Beginner),
            WelcomeChoice::Advanced => Some(Difficulty::Advanced),
            WelcomeChoice::AllLevels => None,
        }
    }
}

/// Entries of the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOption {
    Theme,
    Language,
}

impl SettingsOption {
    pub const ALL: [SettingsOption; 2] = [SettingsOption::Theme, SettingsOption::Language];
}
