//! Browse the product catalog.

use anyhow::Result;
use serde::Serialize;
use spice_catalog::prelude::*;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::stars;

/// JSON shape of one listed product.
#[derive(Serialize)]
struct ProductRow<'a> {
    #[serde(flatten)]
    product: &'a Product,
    display_price: String,
    discount_percentage: Option<u32>,
}

#[derive(Serialize)]
struct ProductsReport<'a> {
    category: &'static str,
    search: &'a str,
    sort: &'static str,
    total_matched: usize,
    total_pages: usize,
    current_page: usize,
    page_size: usize,
    items: Vec<ProductRow<'a>>,
}

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.file.as_deref())?;

    let sort = args
        .sort
        .as_deref()
        .unwrap_or(&ctx.config.catalog.default_sort);
    let query = CatalogQuery::from_params(
        Some(&args.category),
        Some(&args.search),
        Some(sort),
        Some(args.page),
        Some(args.page_size.unwrap_or(ctx.config.catalog.page_size)),
    );

    let page = catalog.resolve(&query);
    ctx.output.debug(&format!(
        "category={} search={:?} sort={}",
        query.category,
        query.search,
        query.sort.as_str()
    ));

    if ctx.output.is_json() {
        ctx.output.json(&ProductsReport {
            category: query.category.as_str(),
            search: &query.search,
            sort: query.sort.as_str(),
            total_matched: page.total_matched,
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_size: page.page_size,
            items: page
                .items
                .iter()
                .map(|product| ProductRow {
                    product,
                    display_price: ctx.display_price(&product.price),
                    discount_percentage: product.discount_percentage(),
                })
                .collect(),
        });
        return Ok(());
    }

    let title = match query.category {
        CategoryFilter::All => "All Spices".to_string(),
        CategoryFilter::Only(category) => category.display_name().to_string(),
    };
    ctx.output.header(&title);
    ctx.output.kv("Sorted by", query.sort.display_name());

    if page.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }

    let widths = [4, 24, 8, 14, 11, 10];
    println!();
    ctx.output.table_row(&["ID", "NAME", "WEIGHT", "PRICE", "RATING", "STOCK"], &widths);
    for product in &page.items {
        let mut price = ctx.display_price(&product.price);
        if let Some(discount) = product.discount_percentage() {
            price = format!("{} -{}%", price, discount);
        }
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                &product.weight,
                &price,
                &stars(product.rating),
                if product.in_stock { "in stock" } else { "sold out" },
            ],
            &widths,
        );
    }

    let pagination = page.pagination();
    println!();
    ctx.output.info(&format!(
        "Showing {}-{} of {}",
        pagination.start_item(),
        pagination.end_item(),
        page.summary()
    ));
    ctx.output.pages(&pagination, ctx.config.display.page_window);

    Ok(())
}
