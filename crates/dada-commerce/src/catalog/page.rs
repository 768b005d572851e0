//! Static content pages (about, terms, privacy...).

use crate::error::CommerceError;
use crate::ids::PageId;
use chrono::{DateTime, Utc};
use dada_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// A published or draft content page, addressed by its slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub id: PageId,
    pub title: LocalizedText,
    pub slug: String,
    pub content: LocalizedText,
    pub is_published: bool,
    pub show_in_footer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a page. The store assigns the id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageDraft {
    pub title: LocalizedText,
    pub slug: String,
    pub content: LocalizedText,
    pub is_published: bool,
    pub show_in_footer: bool,
}

impl PageDraft {
    /// A published, non-footer draft with an empty body.
    pub fn new(title: LocalizedText, slug: impl Into<String>) -> Self {
        Self {
            title,
            slug: slug.into(),
            content: LocalizedText::default(),
            is_published: true,
            show_in_footer: false,
        }
    }

    pub fn with_content(mut self, content: LocalizedText) -> Self {
        self.content = content;
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn in_footer(mut self, show_in_footer: bool) -> Self {
        self.show_in_footer = show_in_footer;
        self
    }

    /// Both titles and the slug must be non-blank.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !self.title.is_complete() || self.slug.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "page title (ar, fr) and slug are required".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_page(self, now: DateTime<Utc>) -> Page {
        Page {
            id: PageId::generate(),
            title: self.title,
            slug: normalize_slug(&self.slug),
            content: self.content,
            is_published: self.is_published,
            show_in_footer: self.show_in_footer,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageUpdate {
    pub title: Option<LocalizedText>,
    pub slug: Option<String>,
    pub content: Option<LocalizedText>,
    pub is_published: Option<bool>,
    pub show_in_footer: Option<bool>,
}

impl PageUpdate {
    pub fn apply(self, page: &mut Page, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(slug) = self.slug {
            page.slug = normalize_slug(&slug);
        }
        if let Some(content) = self.content {
            page.content = content;
        }
        if let Some(is_published) = self.is_published {
            page.is_published = is_published;
        }
        if let Some(show_in_footer) = self.show_in_footer {
            page.show_in_footer = show_in_footer;
        }
        page.updated_at = now;
    }
}

/// Lowercase the slug and turn each run of whitespace into a single `-`.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Suggest a slug from a title.
///
/// A handful of Arabic letters are transliterated; every other character
/// outside ASCII word characters, whitespace and `-` is dropped.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_space = false;

    for c in title.to_lowercase().chars() {
        let mapped = match c {
            'أ' | 'إ' | 'آ' | 'ا' => Some('a'),
            'ة' => Some('h'),
            'ي' => Some('y'),
            'و' => Some('w'),
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => Some(c),
            c if c.is_whitespace() => {
                if !in_space {
                    out.push('-');
                }
                in_space = true;
                continue;
            }
            _ => None,
        };
        if let Some(c) = mapped {
            out.push(c);
            in_space = false;
        }
    }

    out
}
