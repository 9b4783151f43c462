//! # Application State
//!
//! Core business state for YoCode. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog        // immutable for the screen's lifetime
//! ├── builtin_catalog: bool   // rebuilt in the new locale on recreate
//! ├── filter: Filter          // current criterion
//! ├── visible: Vec<usize>     // filtered view (catalog indices)
//! ├── theme: Theme            // appearance setting
//! ├── language: UiLanguage    // UI language setting
//! ├── locale: Locale          // language resolved for this run
//! ├── screen: Screen          // catalog or a drawer destination
//! └── status_message: String  // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use log::debug;

use crate::core::catalog::{Catalog, LanguageEntry};
use crate::core::config::ResolvedConfig;
use crate::core::filter::Filter;
use crate::core::i18n::Locale;
use crate::core::navigation::Screen;
use crate::core::settings::{Theme, UiLanguage};

pub struct App {
    pub catalog: Catalog,
    pub builtin_catalog: bool,
    pub filter: Filter,
    pub visible: Vec<usize>,
    pub theme: Theme,
    pub language: UiLanguage,
    pub locale: Locale,
    pub screen: Screen,
    pub status_message: String,
}

impl App {
    /// Create the catalog screen. `None` uses the built-in catalog.
    pub fn new(catalog: Option<Catalog>, theme: Theme, language: UiLanguage) -> Self {
        let locale = Locale::resolve(language);
        let builtin_catalog = catalog.is_none();
        let catalog = catalog.unwrap_or_else(|| Catalog::builtin(locale));
        let mut app = Self {
            catalog,
            builtin_catalog,
            filter: Filter::All,
            visible: Vec::new(),
            theme,
            language,
            locale,
            screen: Screen::Catalog,
            status_message: String::new(),
        };
        app.refresh_view();
        app
    }

    pub fn from_config(config: &ResolvedConfig, catalog: Option<Catalog>) -> Self {
        Self::new(catalog, config.theme, config.language)
    }

    /// Replace the current criterion and recompute the filtered view.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.refresh_view();
    }

    pub fn refresh_view(&mut self) {
        self.visible = self.filter.select(&self.catalog);
        self.status_message = self.describe_view();
        debug!("Filter {:?} -> {:?}", self.filter, self.visible);
    }

    /// Entries of the filtered view, in catalog order.
    pub fn visible_entries(&self) -> Vec<&LanguageEntry> {
        self.visible
            .iter()
            .filter_map(|&index| self.catalog.get(index))
            .collect()
    }

    /// Rebuild the screen for a new UI language: fresh locale, fresh
    /// built-in catalog, no filter, back on the catalog.
    pub fn recreate(&mut self, language: UiLanguage) {
        self.language = language;
        self.locale = Locale::resolve(language);
        if self.builtin_catalog {
            self.catalog = Catalog::builtin(self.locale);
        }
        self.screen = Screen::Catalog;
        self.set_filter(Filter::All);
    }

    fn describe_view(&self) -> String {
        let strings = self.locale.strings();
        let label = match &self.filter {
            Filter::All => strings.all_levels.to_string(),
            Filter::Text(query) => format!("\"{query}\""),
            Filter::Difficulty(tier) => strings.difficulty(*tier).to_string(),
        };
        format!(
            "{} · {}/{} {}",
            label,
            self.visible.len(),
            self.catalog.len(),
            strings.shown
        )
    }
}
