//! # Actions
//!
//! Everything that can happen on the catalog screen becomes an `Action`.
//! User types in the search box? That's `Action::QueryChanged(text)`.
//! User picks "Advanced" in the welcome dialog? That's
//! `Action::WelcomeChosen(WelcomeChoice::Advanced)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter has to carry out. No side effects here. I/O
//! (persisting settings, redrawing the list) happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::catalog::Difficulty;
use crate::core::filter::Filter;
use crate::core::navigation::{Destination, Screen, WelcomeChoice};
use crate::core::settings::{Theme, UiLanguage};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Search text edited.
    QueryChanged(String),
    /// Search text submitted (Enter).
    QuerySubmitted(String),
    WelcomeChosen(WelcomeChoice),
    FilterDifficulty(Difficulty),
    /// Show the whole catalog again.
    Reset,
    Navigate(Destination),
    /// Leave a destination screen.
    Back,
    SetTheme(Theme),
    SetLanguage(UiLanguage),
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The filtered view changed; push it to the list.
    ViewChanged,
    OpenSettings,
    PersistTheme(Theme),
    /// Also implies the view was rebuilt.
    PersistLanguage(UiLanguage),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::QueryChanged(query) | Action::QuerySubmitted(query) => {
            app.set_filter(Filter::text(Some(&query)));
            Effect::ViewChanged
        }
        Action::WelcomeChosen(choice) => {
            info!("Welcome choice: {:?}", choice);
            let filter = match choice.difficulty() {
                Some(tier) => Filter::Difficulty(tier),
                None => Filter::All,
            };
            app.set_filter(filter);
            Effect::ViewChanged
        }
        Action::FilterDifficulty(tier) => {
            app.set_filter(Filter::Difficulty(tier));
            Effect::ViewChanged
        }
        Action::Reset => {
            app.set_filter(Filter::All);
            Effect::ViewChanged
        }
        Action::Navigate(destination) => match destination.screen() {
            Some(screen) => {
                info!("Opening {:?}", screen);
                app.screen = screen;
                Effect::None
            }
            None => Effect::OpenSettings,
        },
        Action::Back => {
            app.screen = Screen::Catalog;
            Effect::None
        }
        Action::SetTheme(theme) => {
            app.theme = theme;
            Effect::PersistTheme(theme)
        }
        Action::SetLanguage(language) => {
            app.recreate(language);
            Effect::PersistLanguage(language)
        }
        Action::Quit => Effect::Quit,
    }
}
