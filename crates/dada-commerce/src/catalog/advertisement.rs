//! Home page advertisement slides.

use crate::ids::AdvertisementId;
use dada_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advertisement {
    pub id: AdvertisementId,
    /// Banner image URL.
    pub image: String,
    pub title: LocalizedText,
    /// Optional target the banner links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Advertisement {
    pub fn new(image: impl Into<String>, title: LocalizedText) -> Self {
        Self {
            id: AdvertisementId::generate(),
            image: image.into(),
            title,
            link: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<AdvertisementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdvertisementUpdate {
    pub image: Option<String>,
    pub title: Option<LocalizedText>,
    /// `Some(None)` removes the link.
    pub link: Option<Option<String>>,
}

impl AdvertisementUpdate {
    pub fn apply(self, ad: &mut Advertisement) {
        if let Some(image) = self.image {
            ad.image = image;
        }
        if let Some(title) = self.title {
            ad.title = title;
        }
        if let Some(link) = self.link {
            ad.link = link;
        }
    }
}
