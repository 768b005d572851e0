//! Language tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic, the storefront default.
    #[default]
    Ar,
    /// French.
    Fr,
}

/// Reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

impl Language {
    /// All supported languages, default first.
    pub const ALL: [Language; 2] = [Language::Ar, Language::Fr];

    /// Get the language code (e.g., "ar").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Fr => "fr",
        }
    }

    /// Get the reading direction.
    pub fn direction(&self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::Fr => TextDirection::Ltr,
        }
    }

    /// The other language, used by the header language switch.
    pub fn toggled(&self) -> Language {
        match self {
            Language::Ar => Language::Fr,
            Language::Fr => Language::Ar,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "fr" => Ok(Language::Fr),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
