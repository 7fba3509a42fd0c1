//! Port for product persistence (the entity store).

use async_trait::async_trait;

use crate::domain::{Product, ProductDraft, ProductId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "product repository query failed: {message}",
    }
}

/// Port for reading and writing products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by identity, returning `None` when absent.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Store a new product and return it with its assigned identity.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError>;

    /// Replace the fields of an existing product.
    async fn save(&self, product: &Product) -> Result<(), ProductRepositoryError>;

    /// Remove a product. Deleting an unknown identity is not an error.
    async fn delete(&self, id: ProductId) -> Result<(), ProductRepositoryError>;
}
