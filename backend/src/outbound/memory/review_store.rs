//! `ReviewSource` that keeps reviews in process memory.
//!
//! Used when no remote review service is configured.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{ReviewSource, ReviewSourceError};
use crate::domain::{ProductId, Review, ReviewId, ReviewReceipt};

/// Local review store keyed by product.
#[derive(Debug, Default)]
pub struct LocalReviewStore {
    reviews: Mutex<BTreeMap<ProductId, Vec<(ReviewId, Review)>>>,
    next_id: AtomicU64,
}

impl LocalReviewStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewSource for LocalReviewStore {
    async fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>, ReviewSourceError> {
        let reviews = self
            .reviews
            .lock()
            .map_err(|_| ReviewSourceError::store("review store lock poisoned"))?;
        Ok(reviews
            .get(&product_id)
            .map(|entries| entries.iter().map(|(_, review)| review.clone()).collect())
            .unwrap_or_default())
    }

    async fn add_review(&self, review: &Review) -> Result<ReviewReceipt, ReviewSourceError> {
        let review_id = ReviewId::new((self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string());
        let mut reviews = self
            .reviews
            .lock()
            .map_err(|_| ReviewSourceError::store("review store lock poisoned"))?;
        reviews
            .entry(review.product_id())
            .or_default()
            .push((review_id.clone(), review.clone()));
        Ok(ReviewReceipt {
            product_id: review.product_id(),
            review_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Map, json};

    use super::*;

    fn review(product_id: i64, body: &str) -> Review {
        let mut attributes = Map::new();
        attributes.insert("body".to_owned(), json!(body));
        Review::new(ProductId::new(product_id), attributes)
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_product_has_no_reviews() {
        let store = LocalReviewStore::new();
        let reviews = store.reviews_for(ProductId::new(1)).await.expect("lookup");
        assert!(reviews.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn added_reviews_are_listed_per_product_in_order() {
        let store = LocalReviewStore::new();

        let first = store.add_review(&review(1, "great")).await.expect("add");
        let second = store.add_review(&review(1, "fine")).await.expect("add");
        store.add_review(&review(2, "other")).await.expect("add");

        assert_eq!(first.review_id, ReviewId::new("1"));
        assert_eq!(second.review_id, ReviewId::new("2"));
        assert_eq!(
            store.reviews_for(ProductId::new(1)).await.expect("lookup"),
            vec![review(1, "great"), review(1, "fine")]
        );
    }
}
