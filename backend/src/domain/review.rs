//! Review records.
//!
//! Reviews are opaque to this service: apart from the product they belong
//! to, their content is carried through untouched as a JSON attribute map.

use std::fmt;

use serde_json::{Map, Value};

use crate::domain::ProductId;

/// Identifier a review source assigned to a stored review.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewId(String);

impl ReviewId {
    /// Wrap an identifier reported by a review source.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A review associated with one product.
///
/// # Examples
/// ```
/// use product_service::domain::{ProductId, Review};
/// use serde_json::{Map, json};
///
/// let mut attributes = Map::new();
/// attributes.insert("rating".to_owned(), json!(4));
/// let review = Review::new(ProductId::new(3), attributes);
/// assert_eq!(review.attributes().get("rating"), Some(&json!(4)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    product_id: ProductId,
    attributes: Map<String, Value>,
}

impl Review {
    /// Build a review for `product_id` carrying opaque attributes.
    pub fn new(product_id: ProductId, attributes: Map<String, Value>) -> Self {
        Self {
            product_id,
            attributes,
        }
    }

    /// Product the review belongs to.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Opaque review content.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Re-associate the review with another product.
    #[must_use]
    pub fn for_product(mut self, product_id: ProductId) -> Self {
        self.product_id = product_id;
        self
    }

    /// Consume the review, returning its parts.
    pub fn into_parts(self) -> (ProductId, Map<String, Value>) {
        (self.product_id, self.attributes)
    }
}

/// Outcome of a successful review submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReceipt {
    /// Product the review was filed against.
    pub product_id: ProductId,
    /// Identifier assigned by the review source.
    pub review_id: ReviewId,
}
