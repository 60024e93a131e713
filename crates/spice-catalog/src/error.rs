//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading the catalog or the blog.
///
/// Queries never fail; only building the read-only collections can.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Identifiers must be positive.
    #[error("Invalid id {0}: ids must be positive")]
    InvalidId(u32),

    /// The same id appears twice.
    #[error("Duplicate id: {0}")]
    DuplicateId(u32),

    /// A required text field is empty.
    #[error("Record {id}: {field} must not be empty")]
    EmptyField { id: u32, field: &'static str },

    /// Price is zero or negative.
    #[error("Product {id}: price must be positive, got {price}")]
    InvalidPrice { id: u32, price: f64 },

    /// The compare-at price is below the current price.
    #[error("Product {id}: original price {original} is below price {price}")]
    OriginalBelowPrice { id: u32, price: f64, original: f64 },

    /// Rating outside [0, 5].
    #[error("Product {id}: rating {rating} is outside 0..=5")]
    InvalidRating { id: u32, rating: f64 },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
