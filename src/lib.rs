//! YoCode library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::action::Action;
use crate::core::catalog::Difficulty;

/// Starting level chosen on the command line. Skips the welcome dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    All,
}

impl Level {
    pub fn action(self) -> Action {
        match self {
            Level::Beginner => Action::FilterDifficulty(Difficulty::Beginner),
            Level::Intermediate => Action::FilterDifficulty(Difficulty::Intermediate),
            Level::Advanced => Action::FilterDifficulty(Difficulty::Advanced),
            Level::All => Action::Reset,
        }
    }
}
