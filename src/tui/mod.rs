//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event → TuiEvent → overlay / component → Action
//!     → core::update() → Effect → apply_effect() → redraw
//! ```
//!
//! Overlays (welcome dialog, drawer, settings dialogs) take every event
//! while open. The loop only redraws after an event arrived.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ConfigError;
use crate::core::filter::Filter;
use crate::core::i18n::Strings;
use crate::core::navigation::{Destination, Screen, SettingsOption, WelcomeChoice};
use crate::core::settings::{SettingsStore, Theme, UiLanguage};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ChoiceDialogState, DialogEvent, DrawerEvent, DrawerState, LanguageListState, SearchBox,
    SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub use theme::Palette;

/// Modal layer drawn above the screen. At most one is open.
pub enum Overlay {
    Welcome(ChoiceDialogState<WelcomeChoice>),
    Drawer(DrawerState),
    Settings(ChoiceDialogState<SettingsOption>),
    Theme(ChoiceDialogState<Theme>),
    Language(ChoiceDialogState<UiLanguage>),
}

impl Overlay {
    pub fn welcome(strings: &Strings) -> Self {
        let options = WelcomeChoice::ALL
            .iter()
            .map(|&choice| (choice, strings.welcome_choice(choice).to_string()))
            .collect();
        Overlay::Welcome(
            ChoiceDialogState::new(strings.welcome_title, options)
                .with_message(strings.welcome_message),
        )
    }

    pub fn settings(strings: &Strings) -> Self {
        let options = SettingsOption::ALL
            .iter()
            .map(|&option| (option, strings.settings_option(option).to_string()))
            .collect();
        Overlay::Settings(ChoiceDialogState::new(strings.settings, options))
    }

    pub fn theme(strings: &Strings, current: Theme) -> Self {
        let options = Theme::ALL
            .iter()
            .map(|&theme| (theme, strings.theme(theme).to_string()))
            .collect();
        Overlay::Theme(ChoiceDialogState::new(strings.choose_theme, options).with_current(current))
    }

    pub fn language(strings: &Strings, current: UiLanguage) -> Self {
        let options = UiLanguage::ALL
            .iter()
            .map(|&language| (language, strings.language(language).to_string()))
            .collect();
        Overlay::Language(
            ChoiceDialogState::new(strings.choose_language, options).with_current(current),
        )
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub language_list: LanguageListState,
    pub detail_scroll: ScrollViewState,
    pub overlay: Option<Overlay>,
    pub palette: Palette,
}

impl TuiState {
    pub fn new(app: &App, show_welcome: bool) -> Self {
        let strings = app.locale.strings();
        let palette = Palette::for_theme(app.theme);
        let mut language_list = LanguageListState::default();
        language_list.update_list(&app.visible_entries());
        Self {
            search_box: SearchBox::new(strings.search_title, palette),
            language_list,
            detail_scroll: ScrollViewState::default(),
            overlay: show_welcome.then(|| Overlay::welcome(strings)),
            palette,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for the search box
            SetCursorStyle::SteadyBlock  // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(
    mut app: App,
    store: &mut dyn SettingsStore,
    show_welcome: bool,
) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app, show_welcome);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, store, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Route one event through overlays, screens and components. Returns true to quit.
pub fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn SettingsStore,
    event: TuiEvent,
) -> bool {
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return false;
    }

    // ForceQuit (Ctrl+C) always quits regardless of overlays
    if matches!(event, TuiEvent::ForceQuit) {
        let effect = update(app, Action::Quit);
        return apply_effect(app, tui, store, effect);
    }

    // When an overlay is open, route all events to it
    if let Some(overlay) = tui.overlay.take() {
        return dispatch_overlay(app, tui, store, overlay, &event);
    }

    let action = match event {
        TuiEvent::ToggleDrawer => {
            tui.overlay = Some(Overlay::Drawer(DrawerState::new()));
            return false;
        }
        TuiEvent::OpenWelcome => {
            tui.overlay = Some(Overlay::welcome(app.locale.strings()));
            return false;
        }
        TuiEvent::OpenSettings => Action::Navigate(Destination::Settings),
        // Destination screens only know how to go back
        TuiEvent::Escape if app.screen != Screen::Catalog => Action::Back,
        _ if app.screen != Screen::Catalog => return false,
        // Esc clears an active filter first, quits otherwise
        TuiEvent::Escape => {
            if app.filter == Filter::All && tui.search_box.is_empty() {
                Action::Quit
            } else {
                tui.search_box.clear();
                Action::Reset
            }
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            if tui.language_list.handle_event(&event).is_some() {
                tui.detail_scroll.scroll_to_top();
            }
            return false;
        }
        TuiEvent::ScrollPageUp => {
            tui.detail_scroll.scroll_page_up();
            return false;
        }
        TuiEvent::ScrollPageDown => {
            tui.detail_scroll.scroll_page_down();
            return false;
        }
        _ => match tui.search_box.handle_event(&event) {
            Some(SearchEvent::Changed(query)) => Action::QueryChanged(query),
            Some(SearchEvent::Submitted(query)) => Action::QuerySubmitted(query),
            None => return false,
        },
    };

    let effect = update(app, action);
    apply_effect(app, tui, store, effect)
}

/// Handle an event for the open overlay. The overlay is put back unless the
/// event closed or replaced it.
fn dispatch_overlay(
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn SettingsStore,
    mut overlay: Overlay,
    event: &TuiEvent,
) -> bool {
    let strings = app.locale.strings();
    let action = match &mut overlay {
        Overlay::Welcome(state) => match state.handle_event(event) {
            Some(DialogEvent::Choose(choice)) => {
                // The level replaces any text query
                tui.search_box.clear();
                Some(Action::WelcomeChosen(choice))
            }
            Some(DialogEvent::Dismiss) => return false,
            None => None,
        },
        Overlay::Drawer(state) => match state.handle_event(event) {
            Some(DrawerEvent::Open(destination)) => Some(Action::Navigate(destination)),
            Some(DrawerEvent::Close) => return false,
            None => None,
        },
        Overlay::Settings(state) => match state.handle_event(event) {
            Some(DialogEvent::Choose(SettingsOption::Theme)) => {
                tui.overlay = Some(Overlay::theme(strings, app.theme));
                return false;
            }
            Some(DialogEvent::Choose(SettingsOption::Language)) => {
                tui.overlay = Some(Overlay::language(strings, app.language));
                return false;
            }
            Some(DialogEvent::Dismiss) => return false,
            None => None,
        },
        Overlay::Theme(state) => match state.handle_event(event) {
            Some(DialogEvent::Choose(theme)) => Some(Action::SetTheme(theme)),
            Some(DialogEvent::Dismiss) => return false,
            None => None,
        },
        Overlay::Language(state) => match state.handle_event(event) {
            Some(DialogEvent::Choose(language)) => Some(Action::SetLanguage(language)),
            Some(DialogEvent::Dismiss) => return false,
            None => None,
        },
    };

    match action {
        Some(action) => {
            let effect = update(app, action);
            apply_effect(app, tui, store, effect)
        }
        None => {
            tui.overlay = Some(overlay);
            false
        }
    }
}

/// Carry out what the reducer asked for. Returns true to quit.
pub fn apply_effect(
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn SettingsStore,
    effect: Effect,
) -> bool {
    match effect {
        Effect::None => {}
        Effect::ViewChanged => push_view(app, tui),
        Effect::OpenSettings => tui.overlay = Some(Overlay::settings(app.locale.strings())),
        Effect::PersistTheme(theme) => {
            tui.palette = Palette::for_theme(theme);
            let result = store.set_theme(theme);
            report_saved(app, result);
        }
        Effect::PersistLanguage(language) => {
            // The screen was recreated: the old query goes with it
            tui.search_box.clear();
            push_view(app, tui);
            let result = store.set_language(language);
            report_saved(app, result);
        }
        Effect::Quit => return true,
    }
    false
}

/// Hand the filtered view to the list.
fn push_view(app: &App, tui: &mut TuiState) {
    tui.language_list.update_list(&app.visible_entries());
    tui.detail_scroll.scroll_to_top();
}

fn report_saved(app: &mut App, result: Result<(), ConfigError>) {
    let strings = app.locale.strings();
    match result {
        Ok(()) => app.status_message = strings.settings_saved.to_string(),
        Err(e) => {
            warn!("Failed to save settings: {}", e);
            app.status_message = format!("{}: {}", strings.settings_failed, e);
        }
    }
}
