//! # Catalog
//!
//! The immutable list of languages shown on the catalog screen.
//!
//! ```text
//! Catalog
//! └── entries: Vec<LanguageEntry>
//!     ├── name            // unique within the catalog
//!     ├── description     // locale-specific prose
//!     ├── icon: IconRef   // opaque asset handle
//!     ├── difficulty      // Beginner | Intermediate | Advanced
//!     ├── progress / total_lessons
//!     ├── features        // display-only tags
//!     └── learning_path   // Vec<LearningModule>
//! ```
//!
//! A catalog is built once when the screen is created and never mutated
//! afterwards. Filters only ever select a subset of it (see `filter`).

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::i18n::Locale;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

/// Opaque handle to the visual asset of a language.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    /// Short tag used where no image can be drawn, at most four characters.
    pub fn badge(&self) -> String {
        self.0.chars().take(4).collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LearningModule {
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: IconRef,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub total_lessons: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub learning_path: Vec<LearningModule>,
}

impl LanguageEntry {
    /// Entry with only the required fields set; the rest take their defaults.
    pub fn new(name: &str, description: &str, icon: &str, difficulty: Difficulty) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            icon: IconRef(icon.to_string()),
            difficulty,
            progress: 0,
            total_lessons: 0,
            features: Vec::new(),
            learning_path: Vec::new(),
        }
    }

    /// Completed share of the lessons, or `None` when the entry has no lessons.
    pub fn completion(&self) -> Option<f64> {
        if self.total_lessons == 0 {
            return None;
        }
        Some((self.progress.min(self.total_lessons) as f64) / self.total_lessons as f64)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateName(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateName(name) => {
                write!(f, "catalog lists \"{name}\" more than once")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<LanguageEntry>,
}

/// On-disk shape of a catalog file: a list of `[[languages]]` tables.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    languages: Vec<LanguageEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<LanguageEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Load a catalog from a TOML file of `[[languages]]` tables.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let file: CatalogFile = toml::from_str(&contents).map_err(CatalogError::Parse)?;
        let catalog = Self::new(file.languages)?;
        info!(
            "Loaded {} languages from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog shipped with the app, described in the given locale.
    pub fn builtin(locale: Locale) -> Self {
        let french = locale == Locale::French;
        let text = |fr: &str, en: &str| if french { fr.to_string() } else { en.to_string() };

        let python = LanguageEntry {
            progress: 0,
            total_lessons: 20,
            features: ["Data Science", "Web", "AI", "Automation"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            learning_path: vec![
                LearningModule {
                    title: text("Introduction", "Introduction"),
                    topics: vec![
                        text("Variables et types", "Variables and types"),
                        text("Structures de contrôle", "Control flow"),
                        text("Fonctions", "Functions"),
                    ],
                },
                LearningModule {
                    title: text("Intermédiaire", "Intermediate"),
                    topics: vec![
                        text("Classes et objets", "Classes and objects"),
                        text("Gestion des erreurs", "Error handling"),
                        text("Modules et packages", "Modules and packages"),
                    ],
                },
            ],
            ..LanguageEntry::new(
                "Python",
                &text(
                    "Le meilleur langage pour débuter",
                    "The best language to get started",
                ),
                "py",
                Difficulty::Beginner,
            )
        };

        let entries = vec![
            python,
            LanguageEntry::new(
                "Java",
                &text(
                    "Langage orienté objet populaire pour Android",
                    "Popular object-oriented language for Android",
                ),
                "java",
                Difficulty::Intermediate,
            ),
            LanguageEntry::new(
                "C++",
                &text(
                    "Langage puissant pour la programmation système",
                    "Powerful language for systems programming",
                ),
                "c++",
                Difficulty::Advanced,
            ),
            LanguageEntry::new(
                "Rust",
                &text(
                    "Langage moderne pour des systèmes performants et sûrs",
                    "Modern language for fast and safe systems",
                ),
                "rs",
                Difficulty::Advanced,
            ),
            LanguageEntry::new(
                "JavaScript",
                &text(
                    "Le langage du web par excellence",
                    "The language of the web",
                ),
                "js",
                Difficulty::Beginner,
            ),
        ];

        debug!("Built-in catalog created for {:?}", locale);
        Self { entries }
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LanguageEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
