//! Driving port for review submission.

use async_trait::async_trait;

use crate::domain::{Error, Review, ReviewReceipt};

/// Use-case port for filing a review against a product.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommand: Send + Sync {
    /// Forward a review to the review source and report its actual outcome.
    async fn submit_review(&self, review: Review) -> Result<ReviewReceipt, Error>;
}
