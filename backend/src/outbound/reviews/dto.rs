//! Wire DTOs exchanged with the review service.
//!
//! Review bodies are opaque: only `productId` is interpreted, every other
//! field is carried through as-is. A `productId` that is not an integer is
//! ignored rather than failing the whole list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::{ProductId, Review, ReviewId};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReviewDto {
    #[serde(
        default,
        deserialize_with = "lenient_product_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub(super) product_id: Option<i64>,
    #[serde(flatten)]
    pub(super) attributes: Map<String, Value>,
}

fn lenient_product_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64())
}

impl ReviewDto {
    pub(super) fn from_domain(review: &Review) -> Self {
        Self {
            product_id: Some(review.product_id().as_i64()),
            attributes: review.attributes().clone(),
        }
    }

    /// Reviews without a usable `productId` are attributed to the requested
    /// product.
    pub(super) fn into_domain(self, requested: ProductId) -> Review {
        let product_id = self.product_id.map_or(requested, ProductId::new);
        Review::new(product_id, self.attributes)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CreatedReviewDto {
    pub(super) id: ReviewIdDto,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ReviewIdDto {
    Number(i64),
    Text(String),
}

impl CreatedReviewDto {
    pub(super) fn into_review_id(self) -> Option<ReviewId> {
        match self.id {
            ReviewIdDto::Number(raw) => Some(ReviewId::new(raw.to_string())),
            ReviewIdDto::Text(raw) if raw.trim().is_empty() => None,
            ReviewIdDto::Text(raw) => Some(ReviewId::new(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn review_without_product_id_uses_requested_product() {
        let dto: ReviewDto =
            serde_json::from_value(json!({ "rating": 5, "body": "great" })).expect("decode");

        let review = dto.into_domain(ProductId::new(7));

        assert_eq!(review.product_id(), ProductId::new(7));
        assert_eq!(review.attributes().get("rating"), Some(&json!(5)));
        assert!(review.attributes().get("productId").is_none());
    }

    #[rstest]
    #[case::text(json!("abc"))]
    #[case::fractional(json!(2.5))]
    #[case::null(Value::Null)]
    #[case::object(json!({ "id": 3 }))]
    fn non_integer_product_id_falls_back_to_requested_product(#[case] raw: Value) {
        let dto: ReviewDto =
            serde_json::from_value(json!({ "productId": raw, "rating": 1 })).expect("decode");

        let review = dto.into_domain(ProductId::new(7));

        assert_eq!(review.product_id(), ProductId::new(7));
        assert_eq!(review.attributes().get("rating"), Some(&json!(1)));
    }

    #[rstest]
    fn list_with_one_malformed_product_id_still_decodes() {
        let dtos: Vec<ReviewDto> = serde_json::from_value(json!([
            { "productId": 4, "rating": 5 },
            { "productId": "four", "rating": 3 }
        ]))
        .expect("decode");

        let ids: Vec<ProductId> = dtos
            .into_iter()
            .map(|dto| dto.into_domain(ProductId::new(4)).product_id())
            .collect();

        assert_eq!(ids, vec![ProductId::new(4), ProductId::new(4)]);
    }

    #[rstest]
    fn outgoing_review_carries_product_id_and_attributes() {
        let mut attributes = Map::new();
        attributes.insert("rating".to_owned(), json!(2));
        let review = Review::new(ProductId::new(3), attributes);

        let value = serde_json::to_value(ReviewDto::from_domain(&review)).expect("encode");

        assert_eq!(value, json!({ "productId": 3, "rating": 2 }));
    }

    #[rstest]
    #[case::numeric(json!({ "id": 12 }), Some("12"))]
    #[case::text(json!({ "id": "abc" }), Some("abc"))]
    #[case::blank(json!({ "id": "  " }), None)]
    fn created_review_id_accepts_numbers_and_strings(
        #[case] body: Value,
        #[case] expected: Option<&str>,
    ) {
        let dto: CreatedReviewDto = serde_json::from_value(body).expect("decode");
        assert_eq!(dto.into_review_id(), expected.map(ReviewId::new));
    }
}
