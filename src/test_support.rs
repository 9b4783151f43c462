//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::Catalog;
use crate::core::i18n::Locale;
use crate::core::settings::{Theme, UiLanguage};
use crate::core::state::App;

/// Python, Java, C++, Rust, JavaScript with their French descriptions.
pub fn sample_catalog() -> Catalog {
    Catalog::builtin(Locale::French)
}

/// Creates a test App over the sample catalog with English UI strings.
pub fn test_app() -> App {
    App::new(Some(sample_catalog()), Theme::Dark, UiLanguage::English)
}
