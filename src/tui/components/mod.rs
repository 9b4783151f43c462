//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: app title, subtitle and filter status
//! - `DetailPane`: everything about the selected language
//! - `DestinationScreen`: Profile / Progress / Achievements
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events. Overlays follow the
//! persistent state + transient wrapper pattern: `XState` lives in
//! `TuiState`, `X` is created each frame with borrowed state.
//! - `SearchBox`: single-line query editor
//! - `LanguageList`: the presentation adapter for the filtered view
//! - `ChoiceDialog`: welcome, settings, theme and language dialogs
//! - `Drawer`: navigation drawer
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file, shared layout helpers)
//! ├── title_bar.rs      (Top status bar)
//! ├── search_box.rs     (Query input)
//! ├── language_list.rs  (Filtered catalog list)
//! ├── detail_pane.rs    (Selected language details)
//! ├── choice_dialog.rs  (Single-choice modal)
//! ├── drawer.rs         (Navigation drawer)
//! └── destination.rs    (Drawer destination screens)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod choice_dialog;
pub mod destination;
pub mod detail_pane;
pub mod drawer;
pub mod language_list;
pub mod search_box;
pub mod title_bar;

pub use choice_dialog::{ChoiceDialog, ChoiceDialogState, DialogEvent};
pub use destination::DestinationScreen;
pub use detail_pane::DetailPane;
pub use drawer::{Drawer, DrawerEvent, DrawerState};
pub use language_list::{LanguageList, LanguageListState};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    let count = s.chars().count();
    if count <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
