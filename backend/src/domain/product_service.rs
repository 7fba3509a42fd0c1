//! Product domain service.
//!
//! Implements the product and review driving ports on top of the entity
//! store and the review source. The aggregated read treats the review source
//! as best effort: its failures are logged and degrade to an empty list.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{
    ProductCommand, ProductDetails, ProductQuery, ProductRepository, ProductRepositoryError,
    ReviewCommand, ReviewSource, ReviewSourceError,
};
use crate::domain::{Error, Product, ProductDraft, ProductId, Review, ReviewReceipt};

fn map_repository_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product repository unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
    }
}

fn map_review_error(error: ReviewSourceError) -> Error {
    match error {
        ReviewSourceError::Unavailable { .. } | ReviewSourceError::Timeout { .. } => {
            Error::service_unavailable(error.to_string())
        }
        ReviewSourceError::Rejected { status, ref message } => {
            Error::invalid_request(format!("review rejected: {message}"))
                .with_details(json!({ "status": status }))
        }
        ReviewSourceError::Decode { .. } | ReviewSourceError::Store { .. } => {
            Error::internal(error.to_string())
        }
    }
}

fn product_not_found(id: ProductId) -> Error {
    Error::not_found(format!("product {id} is not available"))
        .with_details(json!({ "productId": id.as_i64() }))
}

/// Product service implementing [`ProductCommand`], [`ProductQuery`] and
/// [`ReviewCommand`].
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    reviews: Arc<dyn ReviewSource>,
}

impl ProductService {
    /// Create a service over an entity store and a review source.
    pub fn new(products: Arc<dyn ProductRepository>, reviews: Arc<dyn ReviewSource>) -> Self {
        Self { products, reviews }
    }

    async fn load(&self, id: ProductId) -> Result<Product, Error> {
        self.products
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| product_not_found(id))
    }
}

#[async_trait]
impl ProductCommand for ProductService {
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error> {
        let product = self
            .products
            .create(&draft)
            .await
            .map_err(map_repository_error)?;
        debug!(product_id = %product.id(), "product created");
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, draft: ProductDraft) -> Result<Product, Error> {
        let stored = self.load(id).await?;
        let updated = stored.merge_update(draft);
        self.products
            .save(&updated)
            .await
            .map_err(map_repository_error)?;
        debug!(product_id = %id, "product updated");
        Ok(updated)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), Error> {
        self.products
            .delete(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl ProductQuery for ProductService {
    async fn product_details(&self, id: ProductId) -> Result<ProductDetails, Error> {
        let product = self.load(id).await?;

        let reviews = match self.reviews.reviews_for(id).await {
            Ok(reviews) => reviews,
            Err(error) => {
                warn!(product_id = %id, %error, "review lookup failed; returning no reviews");
                Vec::new()
            }
        };

        Ok(ProductDetails { product, reviews })
    }
}

#[async_trait]
impl ReviewCommand for ProductService {
    async fn submit_review(&self, review: Review) -> Result<ReviewReceipt, Error> {
        let product_id = review.product_id();
        match self.reviews.add_review(&review).await {
            Ok(receipt) => {
                debug!(product_id = %product_id, review_id = %receipt.review_id, "review submitted");
                Ok(receipt)
            }
            Err(error) => {
                warn!(product_id = %product_id, %error, "review submission failed");
                Err(map_review_error(error))
            }
        }
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
