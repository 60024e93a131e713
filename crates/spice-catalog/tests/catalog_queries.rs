//! End-to-end catalog queries against small fixtures and the bundled data.

use spice_catalog::prelude::*;

fn three_products() -> Catalog {
    Catalog::from_records(
        vec![
            ProductRecord::new(1, "Zesty Masala", Category::Blend, 150.0),
            ProductRecord::new(2, "Amber Powder", Category::Powder, 90.0),
            ProductRecord::new(3, "Blend Mix", Category::Blend, 160.0),
        ],
        Currency::USD,
    )
    .unwrap()
}

fn ids(page: &ResultPage<'_, Product>) -> Vec<u32> {
    page.items.iter().map(|p| p.id.get()).collect()
}

#[test]
fn blend_by_price_ascending() {
    let catalog = three_products();
    let query = CatalogQuery::from_params(Some("blend"), Some(""), Some("price-ascending"), Some(1), Some(10));

    let page = catalog.resolve(&query);
    assert_eq!(ids(&page), vec![1, 3]);
    assert_eq!(page.total_matched, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
}

#[test]
fn search_powder_by_name() {
    let catalog = three_products();
    let query = CatalogQuery::from_params(Some("all"), Some("powder"), Some("name"), Some(1), Some(10));

    let page = catalog.resolve(&query);
    assert_eq!(ids(&page), vec![2]);
    assert_eq!(page.total_matched, 1);
}

#[test]
fn page_past_the_end_clamps_to_last_page() {
    let catalog = three_products();
    let query = CatalogQuery::from_params(Some("blend"), None, Some("price-ascending"), Some(5), Some(1));

    let page = catalog.resolve(&query);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(ids(&page), vec![3]);
}

#[test]
fn bad_input_degrades_to_permissive_defaults() {
    let catalog = three_products();
    let query = CatalogQuery::from_params(Some("seeds"), None, Some("popularity"), Some(-4), Some(0));

    let page = catalog.resolve(&query);
    assert_eq!(page.total_matched, 3);
    assert_eq!(page.page_size, 1);
    assert_eq!(page.current_page, 1);
    // Sorted by name: Amber, Blend, Zesty.
    assert_eq!(ids(&page), vec![2]);
}

#[test]
fn same_query_same_page() {
    let catalog = Catalog::builtin().unwrap();
    let query = CatalogQuery::new()
        .with_search("masala")
        .with_sort(SortKey::RatingDesc)
        .with_pagination(2, 4);

    assert_eq!(catalog.resolve(&query), catalog.resolve(&query));
}

#[test]
fn builtin_masala_search() {
    let catalog = Catalog::builtin().unwrap();
    let query = CatalogQuery::new().with_search("MASALA").with_pagination(1, 100);

    let page = catalog.resolve(&query);
    assert!(page.total_matched > 0);
    for product in &page.items {
        let haystack = format!("{} {}", product.name, product.description).to_lowercase();
        assert!(haystack.contains("masala"), "{} does not mention masala", product.name);
    }
}

#[test]
fn builtin_powder_price_order() {
    let catalog = Catalog::builtin().unwrap();
    let query = CatalogQuery::new()
        .with_category(CategoryFilter::Only(Category::Powder))
        .with_sort(SortKey::PriceAsc)
        .with_pagination(1, 50);

    let page = catalog.resolve(&query);
    assert_eq!(page.total_matched, 6);
    assert!(page.items.iter().all(|p| p.category == Category::Powder));
    assert!(page
        .items
        .windows(2)
        .all(|w| w[0].price.amount_cents <= w[1].price.amount_cents));
    // Turmeric (id 1) and Ginger (id 23) share a price; load order wins.
    let tied: Vec<u32> = page
        .items
        .iter()
        .filter(|p| p.price.amount_cents == 12000)
        .map(|p| p.id.get())
        .collect();
    assert_eq!(tied, vec![1, 23]);
}

#[test]
fn out_of_stock_products_are_still_listed() {
    let mut records = vec![
        ProductRecord::new(1, "Cloves Whole", Category::Whole, 220.0),
        ProductRecord::new(2, "Cumin Seeds", Category::Whole, 130.0),
    ];
    records[0].in_stock = false;
    let catalog = Catalog::from_records(records, Currency::USD).unwrap();

    let page = catalog.resolve(&CatalogQuery::new());
    assert_eq!(page.total_matched, 2);
    assert!(!page.items[0].in_stock);
}

#[test]
fn result_page_serializes() {
    let catalog = three_products();
    let page = catalog.resolve(&CatalogQuery::new().with_pagination(1, 2));
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["total_matched"], 3);
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["items"][0]["name"], "Amber Powder");
    assert_eq!(json["items"][0]["category"], "powder");
}

#[test]
fn sub_cent_prices_are_rejected_at_load() {
    let records = vec![
        ProductRecord::new(1, "Long Pepper", Category::Whole, 1.004),
        ProductRecord::new(2, "Star Anise", Category::Whole, 1.001),
    ];
    assert!(matches!(
        Catalog::from_records(records, Currency::USD),
        Err(CatalogError::InvalidPrice { id: 1, .. })
    ));
}
