//! Delivery options and their prices.

use crate::money::Money;
use dada_i18n::{t, Language};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the parcel reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingType {
    /// Delivered to the customer's door.
    #[default]
    Home,
    /// Picked up at the carrier's office.
    Office,
}

impl ShippingType {
    pub const ALL: [ShippingType; 2] = [ShippingType::Home, ShippingType::Office];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingType::Home => "home",
            ShippingType::Office => "office",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match self {
            ShippingType::Home => t(language, "checkout.home.delivery"),
            ShippingType::Office => t(language, "checkout.office.delivery"),
        }
    }
}

impl FromStr for ShippingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(ShippingType::Home),
            "office" => Ok(ShippingType::Office),
            other => Err(format!("unknown shipping type: {other}")),
        }
    }
}

impl fmt::Display for ShippingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat delivery prices, one per shipping type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRates {
    pub home: Money,
    pub office: Money,
}

impl ShippingRates {
    pub const DEFAULT_HOME: Money = Money::new(400);
    pub const DEFAULT_OFFICE: Money = Money::new(200);

    pub fn new(home: Money, office: Money) -> Self {
        Self { home, office }
    }

    pub fn price_for(&self, shipping_type: ShippingType) -> Money {
        match shipping_type {
            ShippingType::Home => self.home,
            ShippingType::Office => self.office,
        }
    }
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOME, Self::DEFAULT_OFFICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_for() {
        let rates = ShippingRates::default();
        assert_eq!(rates.price_for(ShippingType::Home), Money::new(400));
        assert_eq!(rates.price_for(ShippingType::Office), Money::new(200));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ShippingType::Home.label(Language::Ar), "توصيل للمنزل");
        assert_eq!(ShippingType::Office.label(Language::Ar), "توصيل لمكتب التوصيل");
        assert_eq!(ShippingType::Home.label(Language::Fr), "Livraison à domicile");
    }

    #[test]
    fn test_parse() {
        assert_eq!("office".parse::<ShippingType>(), Ok(ShippingType::Office));
        assert_eq!("HOME".parse::<ShippingType>(), Ok(ShippingType::Home));
        assert!("drone".parse::<ShippingType>().is_err());
    }
}
