use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ChoiceDialog, DestinationScreen, DetailPane, Drawer, LanguageList, TitleBar,
};
use crate::tui::{Overlay, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Block;

/// Screen regions, top to bottom.
pub struct AppLayout {
    pub title: Rect,
    pub search: Rect,
    pub main: Rect,
    pub help: Rect,
}

pub fn layout(area: Rect) -> AppLayout {
    use Constraint::{Length, Min};
    let [title, search, main, help] =
        Layout::vertical([Length(1), Length(3), Min(0), Length(1)]).areas(area);
    AppLayout {
        title,
        search,
        main,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let strings = app.locale.strings();
    let palette = tui.palette;
    let areas = layout(frame.area());

    // Theme background
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    TitleBar::new(strings.app_title, strings.subtitle, &app.status_message, palette)
        .render(frame, areas.title);

    tui.search_box.palette = palette;
    tui.search_box.title = format!(" {} ", strings.search_title);
    tui.search_box.render(frame, areas.search);

    match app.screen {
        Screen::Catalog => {
            let [list_area, detail_area] = Layout::horizontal([
                Constraint::Percentage(55),
                Constraint::Percentage(45),
            ])
            .areas(areas.main);

            LanguageList::new(&mut tui.language_list, strings, palette).render(frame, list_area);

            DetailPane {
                entry: tui.language_list.selected_entry(),
                strings,
                palette,
                scroll_state: &mut tui.detail_scroll,
            }
            .render(frame, detail_area);
        }
        screen => {
            DestinationScreen {
                screen,
                catalog: &app.catalog,
                strings,
                palette,
            }
            .render(frame, areas.main);
        }
    }

    frame.render_widget(
        Line::styled(strings.help_catalog, palette.muted()).centered(),
        areas.help,
    );

    match &mut tui.overlay {
        Some(Overlay::Welcome(state)) => {
            ChoiceDialog::new(state, palette, strings.help_dialog).render(frame, frame.area())
        }
        Some(Overlay::Settings(state)) => {
            ChoiceDialog::new(state, palette, strings.help_dialog).render(frame, frame.area())
        }
        Some(Overlay::Theme(state)) => {
            ChoiceDialog::new(state, palette, strings.help_dialog).render(frame, frame.area())
        }
        Some(Overlay::Language(state)) => {
            ChoiceDialog::new(state, palette, strings.help_dialog).render(frame, frame.area())
        }
        Some(Overlay::Drawer(state)) => {
            Drawer::new(state, strings, palette).render(frame, areas.main)
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::catalog::Difficulty;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_regions() {
        let areas = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.title.height, 1);
        assert_eq!(areas.search.height, 3);
        assert_eq!(areas.main.height, 19);
        assert_eq!(areas.help.y, 23);
    }

    #[test]
    fn test_draw_catalog_screen() {
        let app = test_app();
        let mut tui = TuiState::new(&app, false);
        let text = render_text(&app, &mut tui);
        assert!(text.contains("YoCode"));
        assert!(text.contains("Search"));
        assert!(text.contains("Languages (5)"));
        assert!(text.contains("Details"));
        assert!(text.contains("All levels · 5/5 shown"));
    }

    #[test]
    fn test_draw_filtered_list() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app, false);
        update(&mut app, Action::FilterDifficulty(Difficulty::Advanced));
        tui.language_list.update_list(&app.visible_entries());
        let text = render_text(&app, &mut tui);
        assert!(text.contains("Languages (2)"));
        assert!(!text.contains("JavaScript"));
    }

    #[test]
    fn test_draw_welcome_overlay() {
        let app = test_app();
        let mut tui = TuiState::new(&app, true);
        let text = render_text(&app, &mut tui);
        assert!(text.contains("Welcome to YoCode!"));
        assert!(text.contains("All levels"));
    }

    #[test]
    fn test_draw_destination_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app, false);
        app.screen = Screen::Achievements;
        let text = render_text(&app, &mut tui);
        assert!(text.contains("Achievements"));
        assert!(text.contains("Coming soon."));
    }
}
