//! The read-only product collection.

use std::collections::HashSet;

use tracing::info;

use crate::catalog::{Category, Product, ProductRecord};
use crate::error::CatalogError;
use crate::money::Currency;
use crate::search::{self, CatalogQuery, CategoryFilter, Facet, ResultPage};

const BUILTIN_PRODUCTS: &str = include_str!("../../data/products.json");

/// Immutable, validated product collection.
///
/// Built once at startup; every query borrows it read-only, so a `Catalog`
/// can be shared across threads without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

impl Catalog {
    /// Validate records into a catalog. Input order is preserved and is
    /// the tie-break order for every sort.
    pub fn from_records(
        records: impl IntoIterator<Item = ProductRecord>,
        currency: Currency,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut products = Vec::new();

        for record in records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            products.push(Product::from_record(record, currency)?);
        }

        info!(products = products.len(), currency = %currency, "catalog loaded");
        Ok(Self { products, currency })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::from_records(records, currency)
    }

    /// The spice catalog bundled with the crate, priced in USD.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PRODUCTS, Currency::USD)
    }

    /// All products in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency every price in this catalog is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Run a query against this catalog.
    pub fn resolve(&self, query: &CatalogQuery) -> ResultPage<'_, Product> {
        search::resolve(&self.products, query)
    }

    /// Per-category product counts for the filter controls.
    pub fn category_facet(&self, selected: CategoryFilter<Category>) -> Facet {
        let mut facet = Facet::terms("Category", "category");
        facet.add_value("all", "All Categories", self.products.len(), selected.is_all());

        for category in Category::ALL {
            let count = self
                .products
                .iter()
                .filter(|p| p.category == category)
                .count();
            facet.add_value(
                category.as_str(),
                category.display_name(),
                count,
                selected == CategoryFilter::Only(category),
            );
        }

        facet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.currency(), Currency::USD);
        assert_eq!(catalog.products()[0].name, "Organic Turmeric Powder");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let records = vec![
            ProductRecord::new(1, "Cumin Seeds", Category::Whole, 130.0),
            ProductRecord::new(1, "Cloves Whole", Category::Whole, 220.0),
        ];
        assert!(matches!(
            Catalog::from_records(records, Currency::USD),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            Catalog::from_json("{not json", Currency::USD),
            Err(CatalogError::SerializationError(_))
        ));
        assert!(Catalog::from_json(r#"[{"id": 1, "name": "X", "category": "seeds", "price": 1}]"#, Currency::USD).is_err());
    }

    #[test]
    fn test_category_facet_counts() {
        let catalog = Catalog::builtin().unwrap();
        let facet = catalog.category_facet(CategoryFilter::Only(Category::Blend));

        assert_eq!(facet.values.len(), 4);
        assert_eq!(facet.values[0].count, 25);
        let total: usize = facet.values[1..].iter().map(|v| v.count).sum();
        assert_eq!(total, 25);

        let selected: Vec<&str> = facet
            .values
            .iter()
            .filter(|v| v.selected)
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(selected, vec!["blend"]);
    }
}
