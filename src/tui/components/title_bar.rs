//! # TitleBar Component
//!
//! Top status bar: app title, subtitle and the active filter summary.
//!
//! Stateless; all fields are props:
//! - `title` / `subtitle`: localized strings
//! - `status_message`: from `App` (filter label and visible count)
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"YoCode · by YoYo - Code like a pro | Advanced · 2/5 shown"`
//! 2. **Default**: `"YoCode · by YoYo - Code like a pro"`

use crate::tui::component::Component;
use crate::tui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub title: String,
    pub subtitle: String,
    pub status_message: String,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(title: &str, subtitle: &str, status_message: &str, palette: Palette) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            status_message: status_message.to_string(),
            palette,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(self.title.clone(), self.palette.title()),
            Span::styled(format!(" · {}", self.subtitle), self.palette.muted()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                self.palette.base(),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
