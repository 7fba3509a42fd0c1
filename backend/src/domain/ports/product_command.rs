//! Driving port for product mutations.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductDraft, ProductId};

/// Use-case port for creating, updating and deleting products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommand: Send + Sync {
    /// Store a new product and return it with its assigned identity.
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error>;

    /// Merge `draft` into the stored product and persist the result.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown,
    /// without touching storage.
    async fn update_product(&self, id: ProductId, draft: ProductDraft) -> Result<Product, Error>;

    /// Delete a product; unknown identities succeed silently.
    async fn delete_product(&self, id: ProductId) -> Result<(), Error>;
}
