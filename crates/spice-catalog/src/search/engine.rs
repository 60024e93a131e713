//! The catalog query pipeline: filter, search, sort, paginate.

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Product;
use crate::search::{filter, paginate, CatalogQuery, ResultPage, SortKey};

/// Resolve one query against a product collection.
///
/// Stages run in a fixed order so that `total_matched` counts the
/// category and search stages only. The collection is never modified and
/// the call never fails: bad input degrades to the most permissive reading.
pub fn resolve<'a>(products: &'a [Product], query: &CatalogQuery) -> ResultPage<'a, Product> {
    let mut matched = filter::select(products, query.category, &query.search);
    sort_products(&mut matched, query.sort);
    let page = paginate(matched, query.page, query.page_size);

    debug!(
        category = %query.category,
        search = %query.search,
        sort = query.sort.as_str(),
        matched = page.total_matched,
        page = page.current_page,
        total_pages = page.total_pages,
        "catalog query resolved"
    );

    page
}

/// Stable sort by the given key; equal keys keep collection order.
pub fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp_amount(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp_amount(&a.price)),
        SortKey::RatingDesc => products.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
    }
}

/// Locale-style name ordering: case-insensitive first, then lowercase
/// before uppercase. Names equal under both stay in input order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}
