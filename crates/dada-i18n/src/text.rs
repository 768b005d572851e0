//! Bilingual text values.

use crate::Language;
use serde::{Deserialize, Serialize};

/// A piece of text carried in both storefront languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    pub ar: String,
    pub fr: String,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            fr: fr.into(),
        }
    }

    /// Same text in both languages (brand names, SKUs).
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ar: text.clone(),
            fr: text,
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar,
            Language::Fr => &self.fr,
        }
    }

    /// Both variants are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.ar.trim().is_empty() && !self.fr.trim().is_empty()
    }

    /// Case-insensitive substring match against either language.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.ar.to_lowercase().contains(&needle) || self.fr.to_lowercase().contains(&needle)
    }
}
