//! Presentation settings
//!
//! Kept apart from `Tuning`: nothing here affects the simulation.

use serde::{Deserialize, Serialize};

use crate::Error;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "de" | "german" | "deutsch" => Some(Language::German),
            _ => None,
        }
    }

    /// On-screen text for this language (ASCII only, the display font has no umlauts)
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::English => &ENGLISH,
            Language::German => &GERMAN,
        }
    }
}

/// Every piece of text the renderer draws
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub press_to_start: &'static str,
    pub game_over: &'static str,
    pub score: &'static str,
    pub highscores: &'static str,
}

static ENGLISH: Strings = Strings {
    title: "FLAPPY BIRD",
    press_to_start: "Press button",
    game_over: "GAME OVER",
    score: "Score",
    highscores: "HIGHSCORES",
};

static GERMAN: Strings = Strings {
    title: "FLAPPY BIRD",
    press_to_start: "Taste druecken",
    game_over: "SPIEL VORBEI",
    score: "Punkte",
    highscores: "BESTENLISTE",
};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    /// Blink the newest entry on the highscore screen
    pub blink_new_highscore: bool,
    /// Show the running score while playing
    pub show_score: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::English,
            blink_new_highscore: true,
            show_score: true,
        }
    }
}

impl Settings {
    pub fn from_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("DE"), Some(Language::German));
        assert_eq!(Language::from_str("english"), Some(Language::English));
        assert_eq!(Language::from_str("fr"), None);
    }

    #[test]
    fn test_strings_per_language() {
        assert_eq!(Settings::default().strings().game_over, "GAME OVER");
        let german = Settings::from_language(Language::German);
        assert_eq!(german.strings().game_over, "SPIEL VORBEI");
        assert!(german.strings().press_to_start.is_ascii());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{ "language": "German" }"#).unwrap();
        assert_eq!(settings.language, Language::German);
        assert!(settings.blink_new_highscore);
        assert!(Settings::from_json("[]").is_err());
    }
}
