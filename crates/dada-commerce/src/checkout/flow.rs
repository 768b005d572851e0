//! Checkout flow state machine.

use crate::catalog::CatalogStore;
use crate::checkout::{
    whatsapp_link, CheckoutForm, OrderSummary, ShippingType, ShopSession, WilayaDirectory,
};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use dada_i18n::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Where the checkout currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutState {
    /// Filling in the delivery form.
    #[default]
    Form,
    /// Order being built and handed off.
    Submitting,
    /// Order recorded and message handed off.
    Placed,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Form => "form",
            CheckoutState::Submitting => "submitting",
            CheckoutState::Placed => "placed",
        }
    }
}

/// The host could not open the message link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Message hand-off failed: {0}")]
pub struct HandoffError(pub String);

/// Opens the composed message link in the host (browser tab, app intent, stdout).
pub trait MessageHandoff {
    fn open(&mut self, url: &str) -> Result<(), HandoffError>;
}

impl<F> MessageHandoff for F
where
    F: FnMut(&str) -> Result<(), HandoffError>,
{
    fn open(&mut self, url: &str) -> Result<(), HandoffError> {
        self(url)
    }
}

/// Errors from submitting a checkout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    /// Required fields are blank; holds their translation keys.
    #[error("Checkout form is incomplete: {}", .0.join(", "))]
    IncompleteForm(Vec<&'static str>),

    #[error("Cannot submit checkout in state {}", .0.as_str())]
    InvalidState(CheckoutState),

    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// What a successful checkout produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    /// The `wa.me` link handed to the host.
    pub link: String,
    /// The rendered message text.
    pub message: String,
    pub total: Money,
}

/// Drives one checkout: `Form → Submitting → Placed`.
///
/// A failed submit returns to `Form` without touching the cart or the order list.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    form: CheckoutForm,
    shipping_type: ShippingType,
    language: Language,
    state: CheckoutState,
    placed: Option<PlacedOrder>,
}

impl CheckoutFlow {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    pub fn shipping_type(&self) -> ShippingType {
        self.shipping_type
    }

    pub fn set_shipping_type(&mut self, shipping_type: ShippingType) {
        self.shipping_type = shipping_type;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The last placed order, while in `Placed`.
    pub fn placed(&self) -> Option<&PlacedOrder> {
        self.placed.as_ref()
    }

    /// Delivery price for the selected shipping type.
    pub fn shipping_cost(&self, catalog: &CatalogStore) -> Money {
        catalog.shipping_rates().price_for(self.shipping_type)
    }

    /// Cart total plus delivery, as shown under the form.
    pub fn preview_total(&self, session: &ShopSession, catalog: &CatalogStore) -> Result<Money, CommerceError> {
        Ok(session
            .cart()
            .pricing()?
            .with_shipping(self.shipping_cost(catalog))?
            .grand_total)
    }

    /// Place the order and hand the message link to the host.
    ///
    /// The order is only recorded (and the cart only cleared) once the
    /// hand-off succeeds.
    pub fn submit<H: MessageHandoff>(
        &mut self,
        session: &mut ShopSession,
        catalog: &CatalogStore,
        directory: &WilayaDirectory,
        handoff: &mut H,
    ) -> Result<PlacedOrder, CheckoutError> {
        if self.state != CheckoutState::Form {
            return Err(CheckoutError::InvalidState(self.state));
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::IncompleteForm(missing));
        }

        self.state = CheckoutState::Submitting;
        match self.place(session, catalog, directory, handoff) {
            Ok(placed) => {
                info!(order_id = %placed.order_id, total = placed.total.amount(), "Checkout placed");
                self.state = CheckoutState::Placed;
                self.placed = Some(placed.clone());
                Ok(placed)
            }
            Err(err) => {
                warn!(error = %err, "Checkout failed");
                self.state = CheckoutState::Form;
                Err(err)
            }
        }
    }

    fn place<H: MessageHandoff>(
        &self,
        session: &mut ShopSession,
        catalog: &CatalogStore,
        directory: &WilayaDirectory,
        handoff: &mut H,
    ) -> Result<PlacedOrder, CheckoutError> {
        let customer = self.form.resolve(directory);
        let shipping_cost = self.shipping_cost(catalog);
        let total = self.preview_total(session, catalog)?;

        let settings = catalog.settings();
        let summary = OrderSummary::from_cart(
            session.cart(),
            &customer,
            self.shipping_type,
            shipping_cost,
            &settings.store_name,
            self.language,
        )?;
        let message = summary.render();
        let link = whatsapp_link(&settings.contact_whatsapp, &message);

        let order_id = session.create_order_with(customer, self.shipping_type, shipping_cost, |_| {
            handoff.open(&link).map_err(CheckoutError::from)
        })?;

        Ok(PlacedOrder {
            order_id,
            link,
            message,
            total,
        })
    }

    /// Start over with a blank form.
    pub fn reset(&mut self) {
        self.form = CheckoutForm::default();
        self.state = CheckoutState::Form;
        self.placed = None;
    }
}
