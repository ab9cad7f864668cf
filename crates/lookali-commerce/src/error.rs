//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in marketplace operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Service not found.
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Seller not found.
    #[error("Seller not found: {0}")]
    SellerNotFound(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Negative price on a catalog record.
    #[error("Invalid price for {item}: {amount_cents} cents")]
    InvalidPrice { item: String, amount_cents: i64 },

    /// Rating outside the 0-5 scale.
    #[error("Invalid rating for {item}: {rating}")]
    InvalidRating { item: String, rating: f64 },

    /// User input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
