//! # Detail Pane Component
//!
//! Everything about the selected language: description, lesson progress,
//! feature tags and the learning path. Content taller than the pane
//! scrolls with PageUp/PageDown.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::LanguageEntry;
use crate::core::i18n::Strings;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const BAR_WIDTH: usize = 20;

/// Text progress bar, e.g. `██████░░░░`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round()) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `3/20 lessons ███░░░ 15%`, or the "no lessons" label.
pub fn progress_line(entry: &LanguageEntry, strings: &Strings, palette: &Palette) -> Line<'static> {
    match entry.completion() {
        Some(ratio) => Line::from(vec![
            Span::styled(
                format!("{}/{} {} ", entry.progress, entry.total_lessons, strings.lessons),
                palette.base(),
            ),
            Span::styled(progress_bar(ratio, BAR_WIDTH), palette.difficulty(entry.difficulty)),
            Span::styled(format!(" {:.0}%", ratio * 100.0), palette.muted()),
        ]),
        None => Line::styled(strings.no_lessons, palette.muted()),
    }
}

pub struct DetailPane<'a> {
    pub entry: Option<&'a LanguageEntry>,
    pub strings: &'static Strings,
    pub palette: Palette,
    pub scroll_state: &'a mut ScrollViewState,
}

impl DetailPane<'_> {
    fn lines(&self, entry: &LanguageEntry) -> Vec<Line<'static>> {
        let strings = self.strings;
        let palette = &self.palette;
        let heading = palette.title().add_modifier(Modifier::UNDERLINED);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(entry.name.clone(), palette.title()),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", strings.difficulty(entry.difficulty)),
                    palette.difficulty(entry.difficulty),
                ),
            ]),
            Line::styled(entry.description.clone(), palette.base()),
            Line::default(),
            progress_line(entry, strings, palette),
        ];

        if !entry.features.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(strings.features, heading));
            lines.extend(
                entry
                    .features
                    .iter()
                    .map(|feature| Line::styled(format!("• {feature}"), palette.base())),
            );
        }

        if !entry.learning_path.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(strings.learning_path, heading));
            for (i, module) in entry.learning_path.iter().enumerate() {
                lines.push(Line::styled(
                    format!("{}. {}", i + 1, module.title),
                    palette.title(),
                ));
                lines.extend(
                    module
                        .topics
                        .iter()
                        .map(|topic| Line::styled(format!("   - {topic}"), palette.base())),
                );
            }
        }

        lines
    }
}

impl Component for DetailPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(format!(" {} ", self.strings.details_title))
            .title_style(self.palette.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(entry) = self.entry else {
            return;
        };

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.lines(entry)).wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut *self.scroll_state);
    }
}
