//! # Destination Screens
//!
//! What the main area shows after picking Profile, Progress or Achievements
//! in the drawer. Nothing flows back to the catalog; Esc returns to it.
//! Progress lists the lesson counters carried by each catalog entry.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::catalog::Catalog;
use crate::core::i18n::Strings;
use crate::core::navigation::Screen;
use crate::tui::component::Component;
use crate::tui::components::detail_pane::progress_line;
use crate::tui::theme::Palette;

pub struct DestinationScreen<'a> {
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub strings: &'static Strings,
    pub palette: Palette,
}

impl DestinationScreen<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        match self.screen {
            Screen::Progress => self
                .catalog
                .entries()
                .iter()
                .flat_map(|entry| {
                    [
                        Line::from(Span::styled(entry.name.clone(), self.palette.title())),
                        progress_line(entry, self.strings, &self.palette),
                        Line::default(),
                    ]
                })
                .collect(),
            Screen::Profile | Screen::Achievements | Screen::Catalog => {
                vec![Line::styled(self.strings.coming_soon, self.palette.muted())]
            }
        }
    }
}

impl Component for DestinationScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(format!(" {} ", self.strings.screen(self.screen)))
            .title_style(self.palette.title())
            .title_bottom(Line::from(self.strings.help_screen).centered());

        let alignment = if self.screen == Screen::Progress {
            Alignment::Left
        } else {
            Alignment::Center
        };

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .style(self.palette.base())
            .alignment(alignment)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::i18n::Locale;
    use crate::core::settings::Theme;
    use crate::test_support::sample_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(screen: Screen) -> String {
        let catalog = sample_catalog();
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DestinationScreen {
                    screen,
                    catalog: &catalog,
                    strings: Locale::English.strings(),
                    palette: Palette::for_theme(Theme::Dark),
                }
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
    fn test_progress_lists_entries() {
        let text = render_text(Screen::Progress);
        assert!(text.contains("Progress"));
        assert!(text.contains("0/20 lessons"));
        assert!(text.contains("No lessons yet"));
        assert!(text.contains("Esc Back"));
    }

    #[test]
    fn test_profile_placeholder() {
        let text = render_text(Screen::Profile);
        assert!(text.contains("Profile"));
        assert!(text.contains("Coming soon."));
    }
}
