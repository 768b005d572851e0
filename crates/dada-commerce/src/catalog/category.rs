//! Category types for product organization.

use crate::ids::CategoryId;
use dada_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// A product category, shown as a tile with an icon and a color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: LocalizedText,
    /// Icon glyph (an emoji in the default catalog).
    pub icon: String,
    /// Display color, e.g. "#ef4444".
    pub color: String,
}

impl Category {
    /// Create a new category with a generated id.
    pub fn new(name: LocalizedText, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name,
            icon: icon.into(),
            color: color.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<CategoryId>) -> Self {
        self.id = id.into();
        self
    }
}

/// Partial update of a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<LocalizedText>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl CategoryUpdate {
    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(icon) = self.icon {
            category.icon = icon;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
    }
}
