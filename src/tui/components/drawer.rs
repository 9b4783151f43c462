//! # Drawer Component
//!
//! Navigation drawer sliding over the left side of the screen. Opened and
//! closed with Tab; Enter opens the highlighted destination.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::core::i18n::Strings;
use crate::core::navigation::Destination;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const DRAWER_WIDTH: u16 = 28;

pub struct DrawerState {
    pub selected: usize,
    pub list_state: ListState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Open(Destination),
    Close,
}

impl DrawerState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for DrawerState {
    type Event = DrawerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DrawerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleDrawer => Some(DrawerEvent::Close),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(Destination::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Destination::ALL.get(self.selected).copied().map(DrawerEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the drawer.
pub struct Drawer<'a> {
    state: &'a mut DrawerState,
    strings: &'static Strings,
    palette: Palette,
}

impl<'a> Drawer<'a> {
    pub fn new(state: &'a mut DrawerState, strings: &'static Strings, palette: Palette) -> Self {
        Self {
            state,
            strings,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [drawer_area, _] =
            Layout::horizontal([Constraint::Length(DRAWER_WIDTH), Constraint::Min(0)]).areas(area);

        frame.render_widget(Clear, drawer_area);

        let block = Block::default()
            .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
            .border_style(self.palette.border())
            .style(self.palette.base())
            .title(format!(" {} ", self.strings.menu_title))
            .title_style(self.palette.title());

        let items: Vec<ListItem> = Destination::ALL
            .iter()
            .enumerate()
            .map(|(i, destination)| {
                let style = if i == self.state.selected {
                    self.palette.selected()
                } else {
                    self.palette.base()
                };
                ListItem::new(Line::styled(
                    format!(" {}", self.strings.destination(*destination)),
                    style,
                ))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, drawer_area, &mut self.state.list_state);
    }
}
