//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use dada_commerce::catalog::CatalogStore;
use dada_commerce::search::{ProductFilter, ProductQuery};
use dada_commerce::ProductId;
use dada_i18n::{t, t_with, Language};

use super::{CatalogArgs, CatalogCommand, ListArgs};
use crate::context::Context;
use crate::output::price_tag;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    match args.command {
        Some(CatalogCommand::List(list)) => list_products(&list, &catalog, ctx),
        None => list_products(&ListArgs::default_listing(), &catalog, ctx),
        Some(CatalogCommand::Show { id }) => show_product(&id, &catalog, ctx),
        Some(CatalogCommand::Categories) => list_categories(&catalog, ctx),
    }
}

impl ListArgs {
    fn default_listing() -> Self {
        Self {
            page: 1,
            per_page: 24,
            ..Default::default()
        }
    }
}

fn build_query(args: &ListArgs, language: Language) -> ProductQuery {
    let mut query = ProductQuery::new()
        .with_sort(args.sort)
        .with_language(language)
        .with_pagination(args.page, args.per_page);
    if let Some(category) = &args.category {
        query = query.with_filter(ProductFilter::category(category.as_str()));
    }
    if args.on_sale {
        query = query.with_filter(ProductFilter::OnSale);
    }
    if args.in_stock {
        query = query.with_filter(ProductFilter::InStock);
    }
    if let Some(text) = &args.search {
        query = query.with_text(text.as_str());
    }
    query
}

fn list_products(args: &ListArgs, catalog: &CatalogStore, ctx: &Context) -> Result<()> {
    let lang = ctx.language;
    let results = catalog.search(&build_query(args, lang));

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(t(lang, "products.title"));
    if results.is_empty() {
        ctx.output.info(t(lang, "products.none"));
        return Ok(());
    }

    let widths = [6, 36, 24, 10];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "STOCK"], &widths);
    for product in &results.items {
        let stock = if product.in_stock {
            "✓"
        } else {
            t(lang, "products.out.of.stock")
        };
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.get(lang),
                &price_tag(product.price, product.old_price),
                stock,
            ],
            &widths,
        );
    }

    let page = results.pagination;
    ctx.output.plain("");
    ctx.output.info(&format!(
        "{}-{} of {} (page {}/{})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages
    ));

    Ok(())
}

fn show_product(id: &str, catalog: &CatalogStore, ctx: &Context) -> Result<()> {
    let lang = ctx.language;
    let product = catalog
        .require_product(&ProductId::new(id))
        .with_context(|| format!("No product with id '{}'", id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(product.name.get(lang));
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv(
        t(lang, "products.price"),
        &price_tag(product.price, product.old_price),
    );
    if let Some(discount) = product.discount_percent() {
        let percent = discount.to_string();
        ctx.output
            .kv("discount", &t_with(lang, "products.discount", &[("percent", percent.as_str())]));
    }
    if let Some(category) = catalog.category(&product.category_id) {
        ctx.output.kv("category", category.name.get(lang));
    }
    if product.has_flavors() {
        ctx.output.kv(t(lang, "products.flavors"), &product.flavors.join(", "));
    }
    if product.has_sizes() {
        ctx.output.kv(t(lang, "products.sizes"), &product.sizes.join(", "));
    }
    if !product.in_stock {
        ctx.output.warn(t(lang, "products.out.of.stock"));
    }

    let description = product.description.get(lang);
    if !description.is_empty() {
        ctx.output.plain("");
        ctx.output.plain(description);
    }
    let usage = product.usage.get(lang);
    if !usage.is_empty() {
        ctx.output.plain("");
        ctx.output.kv(t(lang, "products.usage"), usage);
    }

    Ok(())
}

fn list_categories(catalog: &CatalogStore, ctx: &Context) -> Result<()> {
    let lang = ctx.language;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.categories());
        return Ok(());
    }

    ctx.output.header(t(lang, "categories.title"));
    let widths = [6, 4, 30, 8];
    ctx.output.table_row(&["ID", "", "NAME", "PRODUCTS"], &widths);
    for category in catalog.categories() {
        let count = catalog.products_in_category(&category.id).count();
        ctx.output.table_row(
            &[
                category.id.as_str(),
                &category.icon,
                category.name.get(lang),
                &count.to_string(),
            ],
            &widths,
        );
    }

    let orphaned = catalog.orphaned_products().count();
    if orphaned > 0 {
        ctx.output.warn(&format!("{} product(s) without a category", orphaned));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dada_commerce::search::SortOption;

    #[test]
    fn test_default_listing_shows_everything() {
        let catalog = CatalogStore::seeded();
        let results = catalog.search(&build_query(&ListArgs::default_listing(), Language::Ar));
        assert_eq!(results.pagination.total as usize, catalog.products().len());
    }

    #[test]
    fn test_filters_combine() {
        let catalog = CatalogStore::seeded();
        let args = ListArgs {
            on_sale: true,
            in_stock: true,
            sort: SortOption::PriceAsc,
            ..ListArgs::default_listing()
        };
        let results = catalog.search(&build_query(&args, Language::Fr));
        assert!(results
            .items
            .iter()
            .all(|p| p.is_on_sale() && p.in_stock));
        assert!(results.items.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_category_filter() {
        let catalog = CatalogStore::seeded();
        let category = catalog.categories()[0].id.clone();
        let args = ListArgs {
            category: Some(category.to_string()),
            ..ListArgs::default_listing()
        };
        let results = catalog.search(&build_query(&args, Language::Ar));
        assert!(results.items.iter().all(|p| p.category_id == category));
    }

    #[test]
    fn test_page_past_the_end() {
        let catalog = CatalogStore::seeded();
        let args = ListArgs {
            page: i64::MAX,
            ..ListArgs::default_listing()
        };
        let results = catalog.search(&build_query(&args, Language::Ar));
        assert!(results.is_empty());
        assert_eq!(results.pagination.end_item(), results.pagination.total);
    }
}
