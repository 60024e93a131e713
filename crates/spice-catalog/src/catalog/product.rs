//! Product types.

use crate::catalog::Category;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::search::Listing;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are validated once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Catalog category.
    pub category: Category,
    /// Current price.
    pub price: Money,
    /// Compare-at price, used only for the sale badge.
    pub original_price: Money,
    /// Average rating in [0, 5].
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Description, searched together with the name.
    pub description: String,
    /// Pack size label (e.g. "500g").
    pub weight: String,
    /// Stock flag. Display-only: queries never filter on it.
    pub in_stock: bool,
}

impl Product {
    /// Validate a raw record into a product priced in `currency`.
    pub fn from_record(record: ProductRecord, currency: Currency) -> Result<Self, CatalogError> {
        let id = ProductId::new(record.id);
        if !id.is_valid() {
            return Err(CatalogError::InvalidId(record.id));
        }
        if record.name.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                id: record.id,
                field: "name",
            });
        }
        let price = Money::try_from_decimal(record.price, currency)
            .filter(Money::is_positive)
            .ok_or(CatalogError::InvalidPrice {
                id: record.id,
                price: record.price,
            })?;

        let original = record.original_price.unwrap_or(record.price);
        let original_price = Money::try_from_decimal(original, currency).ok_or(
            CatalogError::InvalidPrice {
                id: record.id,
                price: original,
            },
        )?;
        if original_price.amount_cents < price.amount_cents {
            return Err(CatalogError::OriginalBelowPrice {
                id: record.id,
                price: record.price,
                original,
            });
        }
        if !(record.rating.is_finite() && (0.0..=5.0).contains(&record.rating)) {
            return Err(CatalogError::InvalidRating {
                id: record.id,
                rating: record.rating,
            });
        }

        Ok(Self {
            id,
            name: record.name,
            category: record.category,
            price,
            original_price,
            // -0.0 would sort apart from 0.0.
            rating: record.rating + 0.0,
            reviews: record.reviews,
            description: record.description,
            weight: record.weight,
            in_stock: record.in_stock,
        })
    }

    /// Check if this product is on sale (original price above price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price.amount_cents > self.price.amount_cents
    }

    /// Discount as a whole percentage, if on sale.
    pub fn discount_percentage(&self) -> Option<u32> {
        if !self.is_on_sale() {
            return None;
        }
        let savings = (self.original_price.amount_cents - self.price.amount_cents) as f64;
        Some((savings / self.original_price.amount_cents as f64 * 100.0).round() as u32)
    }
}

impl Listing for Product {
    type Category = Category;

    fn category(&self) -> Category {
        self.category
    }

    fn matches_term(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.description.to_lowercase().contains(term)
    }
}

/// Raw product as it appears in catalog files.
///
/// Accepts both snake_case and the camelCase keys of the storefront data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub price: f64,
    #[serde(default, alias = "originalPrice")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default = "default_in_stock", alias = "inStock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl ProductRecord {
    /// Minimal record, mostly useful for fixtures.
    pub fn new(id: u32, name: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            description: String::new(),
            weight: String::new(),
            in_stock: true,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = Some(original_price);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord::new(1, "Organic Turmeric Powder", Category::Powder, 120.0)
            .with_original_price(150.0)
            .with_rating(4.8)
            .with_description("Premium organic turmeric powder with high curcumin content")
    }

    #[test]
    fn test_product_from_record() {
        let product = Product::from_record(record(), Currency::USD).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.amount_cents, 12000);
        assert_eq!(product.original_price.amount_cents, 15000);
        assert!(product.in_stock);
    }

    #[test]
    fn test_product_discount() {
        let product = Product::from_record(record(), Currency::USD).unwrap();
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percentage(), Some(20));

        let full_price =
            Product::from_record(ProductRecord::new(2, "Tea Masala", Category::Blend, 95.0), Currency::USD)
                .unwrap();
        assert!(!full_price.is_on_sale());
        assert_eq!(full_price.discount_percentage(), None);
    }

    #[test]
    fn test_product_rejects_bad_records() {
        let zero_id = ProductRecord { id: 0, ..record() };
        assert!(matches!(
            Product::from_record(zero_id, Currency::USD),
            Err(CatalogError::InvalidId(0))
        ));

        let blank = ProductRecord { name: "  ".into(), ..record() };
        assert!(matches!(
            Product::from_record(blank, Currency::USD),
            Err(CatalogError::EmptyField { field: "name", .. })
        ));

        let free = ProductRecord { price: 0.0, ..record() };
        assert!(matches!(
            Product::from_record(free, Currency::USD),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let markup = record().with_original_price(100.0);
        assert!(matches!(
            Product::from_record(markup, Currency::USD),
            Err(CatalogError::OriginalBelowPrice { .. })
        ));

        let dust = ProductRecord::new(3, "Dust", Category::Powder, 0.004);
        assert!(matches!(
            Product::from_record(dust, Currency::USD),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let sub_cent = ProductRecord::new(4, "Pinch", Category::Powder, 1.001);
        assert!(matches!(
            Product::from_record(sub_cent, Currency::USD),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let odd_original = record().with_original_price(150.005);
        assert!(matches!(
            Product::from_record(odd_original, Currency::USD),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let overrated = record().with_rating(5.5);
        assert!(matches!(
            Product::from_record(overrated, Currency::USD),
            Err(CatalogError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_cent_prices_are_exact() {
        let product = Product::from_record(
            ProductRecord::new(5, "Cardamom Pods", Category::Whole, 19.99).with_original_price(24.99),
            Currency::USD,
        )
        .unwrap();
        assert_eq!(product.price.amount_cents, 1999);
        assert_eq!(product.original_price.amount_cents, 2499);
    }

    #[test]
    fn test_negative_zero_rating_is_zero() {
        let product = Product::from_record(record().with_rating(-0.0), Currency::USD).unwrap();
        assert!(product.rating.is_sign_positive());
    }

    #[test]
    fn test_record_accepts_storefront_keys() {
        let json = r#"{
            "id": 7,
            "name": "Garam Masala Blend",
            "category": "blend",
            "price": 160,
            "originalPrice": 190,
            "rating": 4.9,
            "inStock": false
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.original_price, Some(190.0));
        assert!(!record.in_stock);
    }

    #[test]
    fn test_matches_term_uses_name_and_description() {
        let product = Product::from_record(record(), Currency::USD).unwrap();
        assert!(product.matches_term("turmeric"));
        assert!(product.matches_term("curcumin"));
        assert!(!product.matches_term("500g"));
    }
}
