//! # Language List Component
//!
//! Renders whatever list it was last given through `update_list`. It never
//! filters on its own; the event loop pushes the filtered view after every
//! filter or reset.
//!
//! ```text
//! │ py   Python       Le meilleur langage pour débuter     Débutant │
//! │ java Java         Langage orienté objet populaire...  Intermé...│
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::catalog::LanguageEntry;
use crate::core::i18n::Strings;
use crate::tui::component::EventHandler;
use crate::tui::components::truncate_str;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const BADGE_WIDTH: usize = 4;
const NAME_WIDTH: usize = 12;

/// Persistent state for the list.
#[derive(Default)]
pub struct LanguageListState {
    pub entries: Vec<LanguageEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

/// Emitted when the highlighted entry changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged(pub usize);

impl LanguageListState {
    /// Replace the displayed entries. Selection goes back to the top.
    pub fn update_list(&mut self, entries: &[&LanguageEntry]) {
        self.entries = entries.iter().map(|&entry| entry.clone()).collect();
        self.selected = 0;
        self.list_state
            .select(if self.entries.is_empty() { None } else { Some(0) });
    }

    pub fn selected_entry(&self) -> Option<&LanguageEntry> {
        self.entries.get(self.selected)
    }
}

impl EventHandler for LanguageListState {
    type Event = SelectionChanged;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SelectionChanged> {
        if self.entries.is_empty() {
            return None;
        }
        let previous = self.selected;
        match event {
            TuiEvent::CursorUp => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.entries.len() - 1)
            }
            _ => return None,
        }
        self.list_state.select(Some(self.selected));
        (self.selected != previous).then_some(SelectionChanged(self.selected))
    }
}

/// Transient render wrapper for the list.
pub struct LanguageList<'a> {
    state: &'a mut LanguageListState,
    strings: &'static Strings,
    palette: Palette,
}

impl<'a> LanguageList<'a> {
    pub fn new(
        state: &'a mut LanguageListState,
        strings: &'static Strings,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            strings,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(format!(" {} ({}) ", self.strings.languages_title, self.state.entries.len()))
            .title_style(self.palette.title());

        if self.state.entries.is_empty() {
            let empty = Paragraph::new(self.strings.empty_list)
                .style(self.palette.muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + highlight symbol column
        let inner_width = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = i == self.state.selected;
                let tier = self.strings.difficulty(entry.difficulty);
                let tier_width = tier.chars().count();
                let desc_width = inner_width
                    .saturating_sub(BADGE_WIDTH + 1)
                    .saturating_sub(NAME_WIDTH + 1)
                    .saturating_sub(tier_width + 1);

                let badge = format!("{:<width$} ", entry.icon.badge(), width = BADGE_WIDTH);
                let name = format!(
                    "{:<width$} ",
                    truncate_str(&entry.name, NAME_WIDTH),
                    width = NAME_WIDTH
                );
                let desc = format!(
                    "{:<width$} ",
                    truncate_str(&entry.description, desc_width),
                    width = desc_width
                );

                let pick = |normal| if is_selected { self.palette.selected() } else { normal };

                ListItem::new(Line::from(vec![
                    Span::styled(badge, pick(self.palette.muted())),
                    Span::styled(name, pick(self.palette.title())),
                    Span::styled(desc, pick(self.palette.base())),
                    Span::styled(tier.to_string(), pick(self.palette.difficulty(entry.difficulty))),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Difficulty;
    use crate::core::filter::filter_by_difficulty;
    use crate::core::i18n::Locale;
    use crate::core::settings::Theme;
    use crate::test_support::sample_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(state: &mut LanguageListState) -> String {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                LanguageList::new(state, Locale::English.strings(), Palette::for_theme(Theme::Dark))
                    .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_update_list_replaces_entries() {
        let catalog = sample_catalog();
        let mut state = LanguageListState::default();
        state.update_list(&catalog.entries().iter().collect::<Vec<_>>());
        assert_eq!(state.entries.len(), 5);

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);

        state.update_list(&filter_by_difficulty(&catalog, Difficulty::Advanced));
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_entry().map(|e| e.name.as_str()), Some("C++"));
    }

    #[test]
    fn test_selection_clamped() {
        let catalog = sample_catalog();
        let mut state = LanguageListState::default();
        state.update_list(&filter_by_difficulty(&catalog, Difficulty::Advanced));

        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), Some(SelectionChanged(1)));
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.selected_entry().map(|e| e.name.as_str()), Some("Rust"));
    }

    #[test]
    fn test_empty_list() {
        let mut state = LanguageListState::default();
        state.update_list(&[]);
        assert_eq!(state.selected_entry(), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert!(render_text(&mut state).contains("No language matches."));
    }

    #[test]
    fn test_render_rows() {
        let catalog = sample_catalog();
        let mut state = LanguageListState::default();
        state.update_list(&catalog.entries().iter().collect::<Vec<_>>());
        let text = render_text(&mut state);
        assert!(text.contains("Languages (5)"));
        assert!(text.contains("Python"));
        assert!(text.contains("JavaScript"));
        assert!(text.contains("Intermediate"));
    }
}
