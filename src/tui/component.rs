use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// A piece of the screen that draws itself.
///
/// Data comes in through struct fields (props). `render` takes `&mut self`
/// so list selection and scroll offsets can be updated during the render
/// pass, like ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// State that reacts to key events, e.g. the search box or a dialog.
pub trait EventHandler {
    /// What the component reports back to the dispatcher.
    type Event;

    /// Consume a `TuiEvent`, returning a higher-level event when something happened.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
