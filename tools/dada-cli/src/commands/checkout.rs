//! Command line checkout.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use dada_commerce::catalog::{CatalogStore, Product};
use dada_commerce::checkout::{CheckoutError, CheckoutFlow, HandoffError, Order, ShopSession};
use dada_commerce::ProductId;
use dada_i18n::{t, Language};
use serde::Serialize;
use tracing::{debug, info};

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::status_badge;

/// One `--item` argument: `product[:flavor[:size]]`. Empty parts mean no choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product: String,
    pub flavor: Option<String>,
    pub size: Option<String>,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':').map(str::trim);
        let product = parts.next().unwrap_or_default();
        if product.is_empty() {
            return Err(format!("missing product id in {s:?}"));
        }
        let mut choice = || {
            parts
                .next()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let flavor = choice();
        let size = choice();
        Ok(Self {
            product: product.to_string(),
            flavor,
            size,
        })
    }
}

impl ItemSpec {
    /// Resolve the chosen variants against the product, defaulting to the first of each.
    fn variants(&self, product: &Product) -> Result<(Option<String>, Option<String>)> {
        let flavor = pick(&self.flavor, &product.flavors, "flavor", &self.product)?;
        let size = pick(&self.size, &product.sizes, "size", &self.product)?;
        Ok((flavor, size))
    }
}

fn pick(
    chosen: &Option<String>,
    available: &[String],
    what: &str,
    product: &str,
) -> Result<Option<String>> {
    match chosen {
        Some(value) if available.contains(value) => Ok(Some(value.clone())),
        Some(value) if available.is_empty() => {
            bail!("Product '{}' has no {} options, got '{}'", product, what, value)
        }
        Some(value) => bail!(
            "Unknown {} '{}' for product '{}' (available: {})",
            what,
            value,
            product,
            available.join(", ")
        ),
        None => Ok(available.first().cloned()),
    }
}

#[derive(Serialize)]
struct CheckoutReport<'a> {
    order: &'a Order,
    link: &'a str,
    message: &'a str,
}

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let lang = ctx.language;
    let catalog = ctx.catalog();
    let directory = ctx.wilayas()?;

    let mut session = ShopSession::new();
    fill_cart(&mut session, &catalog, &args)?;

    let mut flow = CheckoutFlow::new(lang);
    flow.set_shipping_type(args.shipping);
    let form = flow.form_mut();
    form.set_full_name(args.name.as_str());
    form.set_phone(args.phone.as_str());
    form.set_wilaya(args.wilaya.as_str());
    form.set_commune(args.commune.as_str());

    if !args.wilaya.is_empty() {
        let wilaya = directory
            .get(&args.wilaya)
            .ok_or_else(|| anyhow!("Unknown wilaya code '{}'", args.wilaya))?;
        if !args.commune.is_empty() && !wilaya.communes.contains(&args.commune) {
            ctx.output.warn(&format!(
                "Commune '{}' is not listed for {}",
                args.commune, wilaya.name
            ));
        }
    }

    let output = &ctx.output;
    let mut handoff = |url: &str| -> Result<(), HandoffError> {
        debug!(url, "whatsapp handoff");
        output.debug(&format!("Handing off {}", url));
        Ok(())
    };
    let placed = flow
        .submit(&mut session, &catalog, &directory, &mut handoff)
        .map_err(|e| describe(e, lang))?;

    if let Some(status) = args.status {
        session.update_order_status(&placed.order_id, status);
        info!(order = %placed.order_id, status = ?status, "order status set");
    }
    let order = session
        .order(&placed.order_id)
        .context("Placed order is missing from the session")?;

    if ctx.output.is_json() {
        ctx.output.json(&CheckoutReport {
            order,
            link: &placed.link,
            message: &placed.message,
        });
        return Ok(());
    }

    ctx.output.header(t(lang, "checkout.title"));
    ctx.output.plain(&placed.message);
    ctx.output.plain("");
    ctx.output.kv(t(lang, "order.number"), order.short_ref());
    ctx.output.kv(
        "status",
        &status_badge(order.status(), order.status().label(lang)),
    );
    ctx.output.kv(t(lang, "cart.total"), &order.total().to_string());
    ctx.output.success(&placed.link);

    Ok(())
}

fn fill_cart(session: &mut ShopSession, catalog: &CatalogStore, args: &CheckoutArgs) -> Result<()> {
    for item in &args.items {
        let product = catalog
            .require_product(&ProductId::new(item.product.as_str()))
            .with_context(|| format!("No product with id '{}'", item.product))?;
        if !product.in_stock {
            bail!("Product '{}' is out of stock", item.product);
        }
        let (flavor, size) = item.variants(product)?;
        session.add_to_cart(product, flavor.as_deref(), size.as_deref());
    }
    Ok(())
}

fn describe(err: CheckoutError, lang: Language) -> anyhow::Error {
    match err {
        CheckoutError::IncompleteForm(keys) => {
            let fields: Vec<&str> = keys.iter().map(|key| t(lang, key)).collect();
            anyhow!("{}: {}", t(lang, "checkout.incomplete"), fields.join(", "))
        }
        other => anyhow::Error::new(other).context(t(lang, "checkout.error").to_string()),
    }
}
