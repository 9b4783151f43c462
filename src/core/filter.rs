//! # Filter Engine
//!
//! Pure selection over a [`Catalog`]. Every function returns an ordered
//! subsequence of the catalog: entries keep their catalog order and are
//! never modified.
//!
//! ```text
//! Catalog ──► Filter::select() ──► Vec<usize> (visible indices)
//! ```
//!
//! Absent or empty input means "no filter", so none of these can fail.

use crate::core::catalog::{Catalog, Difficulty, LanguageEntry};

/// The criterion currently narrowing the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Case-insensitive substring of name or description.
    Text(String),
    Difficulty(Difficulty),
}

impl Filter {
    /// Text filter for a search box value. An empty query selects everything.
    pub fn text(query: Option<&str>) -> Self {
        match query {
            Some(q) if !q.is_empty() => Filter::Text(q.to_string()),
            _ => Filter::All,
        }
    }

    pub fn matches(&self, entry: &LanguageEntry) -> bool {
        match self {
            Filter::All => true,
            Filter::Text(query) => matches_text(entry, &fold_case(query)),
            Filter::Difficulty(tier) => entry.difficulty == *tier,
        }
    }

    /// Indices of the matching entries, in catalog order.
    pub fn select(&self, catalog: &Catalog) -> Vec<usize> {
        // Fold the query once rather than per entry
        let folded = match self {
            Filter::Text(query) => Some(fold_case(query)),
            _ => None,
        };
        catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| match &folded {
                Some(query) => matches_text(entry, query),
                None => self.matches(entry),
            })
            .map(|(index, _)| index)
            .collect()
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a LanguageEntry> {
        self.select(catalog)
            .into_iter()
            .filter_map(|index| catalog.get(index))
            .collect()
    }
}

/// `query` must already be folded with [`fold_case`].
fn matches_text(entry: &LanguageEntry, query: &str) -> bool {
    fold_case(&entry.name).contains(query) || fold_case(&entry.description).contains(query)
}

/// Case-fold char by char: through the single-char uppercase form, then
/// lowercase. Word position never matters, so `Σ`, `σ` and final `ς` all
/// fold to `σ`.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(fold_char).collect()
}

fn fold_char(c: char) -> std::char::ToLowercase {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u.to_lowercase(),
        // ß -> "SS" and the like: lowercase the char itself
        _ => c.to_lowercase(),
    }
}

/// Entries whose name or description contains `query`, ignoring case.
pub fn filter_by_text<'a>(catalog: &'a Catalog, query: Option<&str>) -> Vec<&'a LanguageEntry> {
    Filter::text(query).apply(catalog)
}

pub fn filter_by_difficulty(catalog: &Catalog, tier: Difficulty) -> Vec<&LanguageEntry> {
    Filter::Difficulty(tier).apply(catalog)
}

/// The whole catalog.
pub fn reset(catalog: &Catalog) -> Vec<&LanguageEntry> {
    Filter::All.apply(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;

    fn names(entries: &[&LanguageEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_empty_and_absent_query_is_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter_by_text(&catalog, None).len(), catalog.len());
        assert_eq!(filter_by_text(&catalog, Some("")).len(), catalog.len());
        assert_eq!(Filter::text(Some("")), Filter::All);
    }

    #[test]
    fn test_text_matches_name_case_insensitively() {
        let catalog = sample_catalog();
        let result = filter_by_text(&catalog, Some("java"));
        assert_eq!(names(&result), ["Java", "JavaScript"]);

        let result = filter_by_text(&catalog, Some("JAVA"));
        assert_eq!(names(&result), ["Java", "JavaScript"]);
    }

    #[test]
    fn test_text_matches_description() {
        let catalog = sample_catalog();
        let result = filter_by_text(&catalog, Some("ANDROID"));
        assert_eq!(names(&result), ["Java"]);

        let result = filter_by_text(&catalog, Some("SYSTÈME"));
        assert_eq!(names(&result), ["C++", "Rust"]);
    }

    #[test]
    fn test_text_ignores_final_sigma_form() {
        let catalog = Catalog::new(vec![
            LanguageEntry::new("ΑΣ", "Γλώσσα", "as", Difficulty::Beginner),
            LanguageEntry::new("Λόγος", "Ελληνικά", "lg", Difficulty::Advanced),
        ])
        .unwrap();

        assert_eq!(names(&filter_by_text(&catalog, Some("σ"))), ["ΑΣ", "Λόγος"]);
        assert_eq!(names(&filter_by_text(&catalog, Some("Σ"))), ["ΑΣ", "Λόγος"]);
        assert_eq!(names(&filter_by_text(&catalog, Some("ας"))), ["ΑΣ"]);
        assert_eq!(names(&filter_by_text(&catalog, Some("ΓΟΣ"))), ["Λόγος"]);
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("ΑΣ"), "ασ");
        assert_eq!(fold_case("λόγος"), "λόγοσ");
        assert_eq!(fold_case("JavaScript"), "javascript");
        assert_eq!(fold_case("Straße"), "straße");
    }

    #[test]
    fn test_text_keeps_whitespace() {
        let catalog = sample_catalog();
        assert!(filter_by_text(&catalog, Some("  ")).is_empty());
    }

    #[test]
    fn test_text_no_match() {
        let catalog = sample_catalog();
        assert!(filter_by_text(&catalog, Some("cobol")).is_empty());
    }

    #[test]
    fn test_difficulty_advanced() {
        let catalog = sample_catalog();
        let result = filter_by_difficulty(&catalog, Difficulty::Advanced);
        assert_eq!(names(&result), ["C++", "Rust"]);
    }

    #[test]
    fn test_difficulty_beginner_keeps_order() {
        let catalog = sample_catalog();
        let result = filter_by_difficulty(&catalog, Difficulty::Beginner);
        assert_eq!(names(&result), ["Python", "JavaScript"]);
    }

    #[test]
    fn test_select_returns_indices() {
        let catalog = sample_catalog();
        assert_eq!(Filter::Difficulty(Difficulty::Advanced).select(&catalog), [2, 3]);
        assert_eq!(Filter::All.select(&catalog), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reset_is_whole_catalog() {
        let catalog = sample_catalog();
        let all: Vec<&LanguageEntry> = catalog.entries().iter().collect();
        assert_eq!(reset(&catalog), all);
    }
}
