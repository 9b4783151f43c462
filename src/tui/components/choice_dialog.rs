//! # Choice Dialog Component
//!
//! Centered modal offering a fixed list of choices: the welcome dialog
//! (level), the settings menu, and the theme and language pickers.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChoiceDialogState<T>` lives in `TuiState`
//! - `ChoiceDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Persistent state for a choice dialog.
pub struct ChoiceDialogState<T> {
    pub title: String,
    pub message: Option<String>,
    pub options: Vec<(T, String)>,
    /// Marked as the current value (single-choice dialogs).
    pub current: Option<T>,
    pub selected: usize,
    pub list_state: ListState,
}

/// Events emitted by a choice dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent<T> {
    Choose(T),
    Dismiss,
}

impl<T: Copy + PartialEq> ChoiceDialogState<T> {
    pub fn new(title: &str, options: Vec<(T, String)>) -> Self {
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title: title.to_string(),
            message: None,
            options,
            current: None,
            selected: 0,
            list_state,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Mark `value` as current and start the cursor on it.
    pub fn with_current(mut self, value: T) -> Self {
        if let Some(index) = self.options.iter().position(|(v, _)| *v == value) {
            self.selected = index;
            self.list_state.select(Some(index));
        }
        self.current = Some(value);
        self
    }

    pub fn selected_value(&self) -> Option<T> {
        self.options.get(self.selected).map(|(value, _)| *value)
    }
}

impl<T: Copy + PartialEq> EventHandler for ChoiceDialogState<T> {
    type Event = DialogEvent<T>;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent<T>> {
        match event {
            TuiEvent::Escape => Some(DialogEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.options.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.options.is_empty() {
                    self.selected = (self.selected + 1).min(self.options.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self.selected_value().map(DialogEvent::Choose),
            _ => None,
        }
    }
}

/// Transient render wrapper for a choice dialog.
pub struct ChoiceDialog<'a, T> {
    state: &'a mut ChoiceDialogState<T>,
    palette: Palette,
    help: &'a str,
}

impl<'a, T: Copy + PartialEq> ChoiceDialog<'a, T> {
    pub fn new(state: &'a mut ChoiceDialogState<T>, palette: Palette, help: &'a str) -> Self {
        Self {
            state,
            palette,
            help,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .style(self.palette.base())
            .title(format!(" {} ", self.state.title))
            .title_style(self.palette.title())
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(self.help).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let message_height = if self.state.message.is_some() { 2 } else { 0 };
        let [message_area, list_area] =
            Layout::vertical([Constraint::Length(message_height), Constraint::Min(0)]).areas(inner);

        if let Some(message) = &self.state.message {
            let paragraph = Paragraph::new(message.as_str())
                .style(self.palette.base())
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, message_area);
        }

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, (value, label))| {
                let is_current = self.state.current == Some(*value);
                let marker = if is_current { "● " } else { "○ " };
                let style = if i == self.state.selected {
                    self.palette.selected()
                } else {
                    self.palette.base()
                };
                // Markers only make sense for single-choice dialogs
                let text = if self.state.current.is_some() {
                    format!("{marker}{label}")
                } else {
                    label.clone()
                };
                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();

        frame.render_stateful_widget(List::new(items), list_area, &mut self.state.list_state);
    }
}
