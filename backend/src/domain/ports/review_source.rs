//! Driven port for review data.
//!
//! Adapters either keep reviews locally or talk to a remote review service;
//! the domain only sees reviews and receipts.

use async_trait::async_trait;

use crate::domain::{ProductId, Review, ReviewReceipt};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while reading or submitting reviews.
    pub enum ReviewSourceError {
        /// The source could not be located or reached.
        Unavailable { message: String } =>
            "review source unavailable: {message}",
        /// The source did not answer in time.
        Timeout { message: String } =>
            "review source timed out: {message}",
        /// The source answered with a status other than the expected one.
        Rejected { status: u16, message: String } =>
            "review source rejected request with status {status}: {message}",
        /// The source response could not be decoded.
        Decode { message: String } =>
            "review source response decode failed: {message}",
        /// The local store failed.
        Store { message: String } =>
            "review store failed: {message}",
    }
}

/// Port for fetching and submitting reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch the reviews recorded for a product.
    async fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>, ReviewSourceError>;

    /// Submit a review and return the identifier the source assigned.
    async fn add_review(&self, review: &Review) -> Result<ReviewReceipt, ReviewSourceError>;
}
