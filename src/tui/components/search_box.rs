//! # SearchBox Component
//!
//! Single-line query editor above the language list. Every edit emits
//! `SearchEvent::Changed` so the list filters as the user types; Enter
//! emits `SearchEvent::Submitted`. The query is kept after submitting.
//!
//! The cursor is a byte offset into `buffer`, always on a char boundary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Borders take one cell on each side.
const BORDER_OFFSET: u16 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Changed(String),
    Submitted(String),
}

pub struct SearchBox {
    /// Query text (Internal State)
    pub buffer: String,
    /// Cursor byte offset (Internal State)
    pos: usize,
    /// Block title (Prop)
    pub title: String,
    /// Colors (Prop)
    pub palette: Palette,
}

impl SearchBox {
    pub fn new(title: &str, palette: Palette) -> Self {
        Self {
            buffer: String::new(),
            pos: 0,
            title: title.to_string(),
            palette,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pos = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }

    /// Byte offset where the visible part of the buffer starts, so the
    /// cursor stays inside a field `width` cells wide.
    fn view_start(&self, width: usize) -> usize {
        if width == 0 {
            return self.pos;
        }
        let mut start = 0;
        while self.buffer[start..self.pos].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        start
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(BORDER_OFFSET * 2) as usize;
        let start = self.view_start(inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border())
            .title(self.title.as_str())
            .title_style(self.palette.title());

        let input = Paragraph::new(&self.buffer[start..])
            .block(block)
            .style(self.palette.base());
        frame.render_widget(input, area);

        let cursor_col = self.buffer[start..self.pos].width() as u16;
        frame.set_cursor_position((
            area.x + BORDER_OFFSET + cursor_col,
            area.y + BORDER_OFFSET,
        ));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Queries are single-line
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.pos, &text);
                self.pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorRight => {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorHome => {
                self.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submitted(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn search_box() -> SearchBox {
        SearchBox::new("Search", Palette::for_theme(Theme::Dark))
    }

    #[test]
    fn test_typing_emits_changed() {
        let mut input = search_box();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('j')),
            Some(SearchEvent::Changed("j".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('a')),
            Some(SearchEvent::Changed("ja".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("j".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut input = search_box();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_submit_keeps_query() {
        let mut input = search_box();
        input.handle_event(&TuiEvent::Paste("rust".to_string()));
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::Submitted("rust".to_string()))
        );
        assert_eq!(input.buffer, "rust");
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = search_box();
        let res = input.handle_event(&TuiEvent::Paste("ja\nva".to_string()));
        assert_eq!(res, Some(SearchEvent::Changed("java".to_string())));
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut input = search_box();
        for c in "syème".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('s'));
        input.handle_event(&TuiEvent::InputChar('t'));
        assert_eq!(input.buffer, "système");

        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "systèm");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "ystèm");
    }

    #[test]
    fn test_clear() {
        let mut input = search_box();
        input.handle_event(&TuiEvent::InputChar('x'));
        input.clear();
        assert!(input.is_empty());
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('y')),
            Some(SearchEvent::Changed("y".to_string()))
        );
    }

    #[test]
    fn test_view_start_scrolls_long_query() {
        let mut input = search_box();
        input.handle_event(&TuiEvent::Paste("abcdefghij".to_string()));
        assert_eq!(input.view_start(20), 0);
        // 10 chars before the cursor, 5 cells of room: show the last 4 plus cursor
        assert_eq!(input.view_start(5), 6);
    }

    #[test]
    fn test_render_shows_title_and_query() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = search_box();
        input.handle_event(&TuiEvent::Paste("java".to_string()));

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Search"));
        assert!(text.contains("java"));
    }
}
