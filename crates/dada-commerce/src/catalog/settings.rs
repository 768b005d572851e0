//! Store-wide settings edited from the back office.

use crate::checkout::ShippingRates;
use crate::money::Money;
use dada_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSettings {
    pub store_name: LocalizedText,
    pub logo: String,
    pub contact_phone: String,
    /// Number the order message is sent to.
    pub contact_whatsapp: String,
    pub address: LocalizedText,
    pub primary_color: String,
    pub secondary_color: String,
    pub home_delivery_price: Money,
    pub office_delivery_price: Money,
}

impl StoreSettings {
    pub fn shipping_rates(&self) -> ShippingRates {
        ShippingRates::new(self.home_delivery_price, self.office_delivery_price)
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: LocalizedText::same("GYM DADA STORE"),
            logo: "/logo.png".to_string(),
            contact_phone: "+213555123456".to_string(),
            contact_whatsapp: "+213555123456".to_string(),
            address: LocalizedText::new("الجزائر العاصمة، الجزائر", "Alger, Algérie"),
            primary_color: "#1e40af".to_string(),
            secondary_color: "#ea580c".to_string(),
            home_delivery_price: ShippingRates::DEFAULT_HOME,
            office_delivery_price: ShippingRates::DEFAULT_OFFICE,
        }
    }
}

/// Partial settings update; also the shape of the `[store]` config table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_delivery_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_delivery_price: Option<Money>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, settings: &mut StoreSettings) {
        if let Some(v) = self.store_name {
            settings.store_name = v;
        }
        if let Some(v) = self.logo {
            settings.logo = v;
        }
        if let Some(v) = self.contact_phone {
            settings.contact_phone = v;
        }
        if let Some(v) = self.contact_whatsapp {
            settings.contact_whatsapp = v;
        }
        if let Some(v) = self.address {
            settings.address = v;
        }
        if let Some(v) = self.primary_color {
            settings.primary_color = v;
        }
        if let Some(v) = self.secondary_color {
            settings.secondary_color = v;
        }
        if let Some(v) = self.home_delivery_price {
            settings.home_delivery_price = v;
        }
        if let Some(v) = self.office_delivery_price {
            settings.office_delivery_price = v;
        }
    }
}
