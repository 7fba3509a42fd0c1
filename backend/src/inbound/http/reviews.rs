//! Review submission handler.
//!
//! ```text
//! POST /product/reviews/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, post, web};

use crate::domain::ProductId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::products::ReviewBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// File a review against a product.
///
/// The path identifier wins over any `productId` in the body. The review
/// service's outcome is reported as-is.
#[utoipa::path(
    post,
    path = "/product/reviews/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = ReviewBody,
    responses(
        (status = 201, description = "Review stored",
            headers(("Location" = String, description = "Path of the new review"))),
        (status = 400, description = "Review rejected", body = ErrorSchema),
        (status = 503, description = "Review service unavailable", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "submitReview"
)]
#[post("/product/reviews/{id}")]
pub async fn submit_review(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ReviewBody>,
) -> ApiResult<HttpResponse> {
    let product_id = ProductId::new(path.into_inner());
    let receipt = state
        .reviews
        .submit_review(payload.into_inner().into_review(product_id))
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!(
                "/product/reviews/{}/{}",
                receipt.product_id, receipt.review_id
            ),
        ))
        .finish())
}
