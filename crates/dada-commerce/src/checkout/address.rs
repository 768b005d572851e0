//! Delivery details: the checkout form and the customer record it resolves to.

use crate::checkout::WilayaDirectory;
use serde::{Deserialize, Serialize};

/// Who the order goes to. `wilaya` holds the wilaya's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerInfo {
    pub full_name: String,
    pub phone: String,
    pub wilaya: String,
    pub commune: String,
}

impl CustomerInfo {
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        wilaya: impl Into<String>,
        commune: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone: phone.into(),
            wilaya: wilaya.into(),
            commune: commune.into(),
        }
    }
}

/// The checkout form as the customer fills it in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub phone: String,
    /// Selected wilaya code, e.g. "16".
    pub wilaya_code: String,
    pub commune: String,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    /// Select a wilaya. The commune belongs to the previous wilaya, so it is cleared.
    pub fn set_wilaya(&mut self, code: impl Into<String>) {
        self.wilaya_code = code.into();
        self.commune.clear();
    }

    pub fn set_commune(&mut self, value: impl Into<String>) {
        self.commune = value.into();
    }

    /// Translation keys of the fields still missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("checkout.full.name");
        }
        if self.phone.trim().is_empty() {
            missing.push("checkout.phone");
        }
        if self.wilaya_code.is_empty() {
            missing.push("checkout.wilaya");
        }
        if self.commune.is_empty() {
            missing.push("checkout.commune");
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build the customer record, swapping the wilaya code for its name.
    pub fn resolve(&self, directory: &WilayaDirectory) -> CustomerInfo {
        CustomerInfo {
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            wilaya: directory.resolve(&self.wilaya_code).to_string(),
            commune: self.commune.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CheckoutForm {
        let mut form = CheckoutForm::new();
        form.set_full_name("Yacine K.");
        form.set_phone("0555 12 34 56");
        form.set_wilaya("16");
        form.set_commune("باب الزوار");
        form
    }

    #[test]
    fn test_filled_form_is_submittable() {
        assert!(filled().is_submittable());
        assert!(CheckoutForm::new().missing_fields().len() == 4);
    }

    #[test]
    fn test_blank_name_or_phone_rejected() {
        let mut form = filled();
        form.set_full_name("   ");
        assert_eq!(form.missing_fields(), vec!["checkout.full.name"]);

        let mut form = filled();
        form.set_phone("\t");
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_changing_wilaya_clears_commune() {
        let mut form = filled();
        form.set_wilaya("31");
        assert_eq!(form.commune, "");
        assert_eq!(form.missing_fields(), vec!["checkout.commune"]);
    }

    #[test]
    fn test_resolve_uses_wilaya_name() {
        let dir = WilayaDirectory::builtin();
        let customer = filled().resolve(&dir);
        assert_eq!(customer.wilaya, "الجزائر");
        assert_eq!(customer.commune, "باب الزوار");

        let mut form = filled();
        form.wilaya_code = "77".to_string();
        assert_eq!(form.resolve(&dir).wilaya, "");
    }
}
