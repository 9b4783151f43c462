//! # Localization
//!
//! Resolves the UI language setting to a concrete [`Locale`] and holds the
//! string table for each locale. Catalog prose is localized separately by
//! `Catalog::builtin`.

use crate::core::catalog::Difficulty;
use crate::core::navigation::{Destination, Screen, SettingsOption, WelcomeChoice};
use crate::core::settings::{Theme, UiLanguage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    French,
    English,
}

impl Locale {
    /// Apply a UI language setting. `System` reads the process locale.
    pub fn resolve(language: UiLanguage) -> Self {
        match language {
            UiLanguage::French => Locale::French,
            UiLanguage::English => Locale::English,
            UiLanguage::System => Self::from_env(|key| std::env::var(key).ok()),
        }
    }

    /// Locale from the first non-empty of `LC_ALL`, `LC_MESSAGES`, `LANG`.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tag = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty());
        match tag {
            Some(tag) if tag.to_lowercase().starts_with("fr") => Locale::French,
            _ => Locale::English,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::French => &FRENCH,
            Locale::English => &ENGLISH,
        }
    }
}

/// Every user-visible label of the catalog screen.
pub struct Strings {
    pub app_title: &'static str,
    pub subtitle: &'static str,
    pub search_title: &'static str,
    pub languages_title: &'static str,
    pub details_title: &'static str,
    pub empty_list: &'static str,
    pub features: &'static str,
    pub learning_path: &'static str,
    pub lessons: &'static str,
    pub no_lessons: &'static str,
    pub welcome_title: &'static str,
    pub welcome_message: &'static str,
    pub welcome_beginner: &'static str,
    pub welcome_advanced: &'static str,
    pub welcome_all: &'static str,
    pub menu_title: &'static str,
    pub settings: &'static str,
    pub choose_theme: &'static str,
    pub choose_language: &'static str,
    pub option_theme: &'static str,
    pub option_language: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub theme_system: &'static str,
    pub language_french: &'static str,
    pub language_english: &'static str,
    pub language_system: &'static str,
    pub profile: &'static str,
    pub progress: &'static str,
    pub achievements: &'static str,
    pub coming_soon: &'static str,
    pub beginner: &'static str,
    pub intermediate: &'static str,
    pub advanced: &'static str,
    pub all_levels: &'static str,
    pub shown: &'static str,
    pub settings_saved: &'static str,
    pub settings_failed: &'static str,
    pub config_ignored: &'static str,
    pub help_catalog: &'static str,
    pub help_dialog: &'static str,
    pub help_screen: &'static str,
}

impl Strings {
    pub fn difficulty(&self, tier: Difficulty) -> &'static str {
        match tier {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }

    pub fn welcome_choice(&self, choice: WelcomeChoice) -> &'static str {
        match choice {
            WelcomeChoice::Beginner => self.welcome_beginner,
            WelcomeChoice::Advanced => self.welcome_advanced,
            WelcomeChoice::AllLevels => self.welcome_all,
        }
    }

    pub fn destination(&self, destination: Destination) -> &'static str {
        match destination {
            Destination::Profile => self.profile,
            Destination::Progress => self.progress,
            Destination::Achievements => self.achievements,
            Destination::Settings => self.settings,
        }
    }

    pub fn screen(&self, screen: Screen) -> &'static str {
        match screen {
            Screen::Catalog => self.languages_title,
            Screen::Profile => self.profile,
            Screen::Progress => self.progress,
            Screen::Achievements => self.achievements,
        }
    }

    pub fn settings_option(&self, option: SettingsOption) -> &'static str {
        match option {
            SettingsOption::Theme => self.option_theme,
            SettingsOption::Language => self.option_language,
        }
    }

    pub fn theme(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.theme_light,
            Theme::Dark => self.theme_dark,
            Theme::System => self.theme_system,
        }
    }

    pub fn language(&self, language: UiLanguage) -> &'static str {
        match language {
            UiLanguage::French => self.language_french,
            UiLanguage::English => self.language_english,
            UiLanguage::System => self.language_system,
        }
    }
}

static FRENCH: Strings = Strings {
    app_title: "YoCode",
    subtitle: "by YoYo - Codez comme un pro",
    search_title: "Rechercher",
    languages_title: "Langages",
    details_title: "Détails",
    empty_list: "Aucun langage ne correspond.",
    features: "Points forts",
    learning_path: "Parcours",
    lessons: "leçons",
    no_lessons: "Aucune leçon pour le moment",
    welcome_title: "Bienvenue sur YoCode!",
    welcome_message: "Choisissez votre niveau pour commencer :",
    welcome_beginner: "Débutant",
    welcome_advanced: "Avancé",
    welcome_all: "Tous les niveaux",
    menu_title: "Menu",
    settings: "Paramètres",
    choose_theme: "Choisir le thème",
    choose_language: "Choisir la langue",
    option_theme: "Thème",
    option_language: "Langue",
    theme_light: "Clair",
    theme_dark: "Sombre",
    theme_system: "Système",
    language_french: "Français",
    language_english: "English",
    language_system: "Système",
    profile: "Profil",
    progress: "Progression",
    achievements: "Succès",
    coming_soon: "Bientôt disponible.",
    beginner: "Débutant",
    intermediate: "Intermédiaire",
    advanced: "Avancé",
    all_levels: "Tous les niveaux",
    shown: "affichés",
    settings_saved: "Paramètres enregistrés",
    settings_failed: "Échec de l'enregistrement",
    config_ignored: "Configuration ignorée, réglages non enregistrés",
    help_catalog: " Tab Menu  Ctrl+L Niveau  Ctrl+S Paramètres  Esc Effacer/Quitter ",
    help_dialog: " Entrée Choisir  Esc Fermer ",
    help_screen: " Esc Retour ",
};

static ENGLISH: Strings = Strings {
    app_title: "YoCode",
    subtitle: "by YoYo - Code like a pro",
    search_title: "Search",
    languages_title: "Languages",
    details_title: "Details",
    empty_list: "No language matches.",
    features: "Highlights",
    learning_path: "Learning path",
    lessons: "lessons",
    no_lessons: "No lessons yet",
    welcome_title: "Welcome to YoCode!",
    welcome_message: "Pick your level to get started:",
    welcome_beginner: "Beginner",
    welcome_advanced: "Advanced",
    welcome_all: "All levels",
    menu_title: "Menu",
    settings: "Settings",
    choose_theme: "Choose theme",
    choose_language: "Choose language",
    option_theme: "Theme",
    option_language: "Language",
    theme_light: "Light",
    theme_dark: "Dark",
    theme_system: "System",
    language_french: "Français",
    language_english: "English",
    language_system: "System",
    profile: "Profile",
    progress: "Progress",
    achievements: "Achievements",
    coming_soon: "Coming soon.",
    beginner: "Beginner",
    intermediate: "Intermediate",
    advanced: "Advanced",
    all_levels: "All levels",
    shown: "shown",
    settings_saved: "Settings saved",
    settings_failed: "Could not save settings",
    config_ignored: "Config file ignored, settings won't be saved",
    help_catalog: " Tab Menu  Ctrl+L Level  Ctrl+S Settings  Esc Clear/Quit ",
    help_dialog: " Enter Select  Esc Close ",
    help_screen: " Esc Back ",
};
