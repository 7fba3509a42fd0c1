//! Driving port for the aggregated product read.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId, Review};

/// A product together with its reviews, built for one response.
///
/// Only constructed once the product lookup succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    /// The stored product.
    pub product: Product,
    /// Reviews for the product; empty when none exist or the source failed.
    pub reviews: Vec<Review>,
}

/// Use-case port for reading a product with its reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Load a product and its reviews.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is
    /// unknown. Review failures never fail the call.
    async fn product_details(&self, id: ProductId) -> Result<ProductDetails, Error>;
}
