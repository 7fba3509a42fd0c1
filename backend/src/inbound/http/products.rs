//! Product HTTP handlers.
//!
//! ```text
//! POST   /products
//! GET    /product/{id}
//! PUT    /products/{id}
//! DELETE /product/{id}
//! ```
//!
//! The singular and plural path prefixes are part of the published contract.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::ports::ProductDetails;
use crate::domain::{Product, ProductDraft, ProductId, Review};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Incoming product representation for create and update.
///
/// Missing fields decode as empty strings. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    #[serde(default)]
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "A widget")]
    pub description: String,
}

impl From<ProductBody> for ProductDraft {
    fn from(value: ProductBody) -> Self {
        ProductDraft::new(value.name, value.description)
    }
}

/// Outgoing product representation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[schema(example = 5)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "A widget")]
    pub description: String,
}

impl From<Product> for ProductView {
    fn from(value: Product) -> Self {
        let (id, draft) = value.into_parts();
        Self {
            id: id.as_i64(),
            name: draft.name,
            description: draft.description,
        }
    }
}

/// Review representation: an opaque JSON object carrying `productId`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ReviewBody(pub Map<String, Value>);

const PRODUCT_ID_FIELD: &str = "productId";

impl ReviewBody {
    /// Build the domain review for `product_id`, which overrides any
    /// `productId` carried in the body.
    pub fn into_review(self, product_id: ProductId) -> Review {
        let mut attributes = self.0;
        attributes.remove(PRODUCT_ID_FIELD);
        Review::new(product_id, attributes)
    }
}

impl From<Review> for ReviewBody {
    fn from(value: Review) -> Self {
        let (product_id, mut attributes) = value.into_parts();
        attributes.insert(PRODUCT_ID_FIELD.to_owned(), Value::from(product_id.as_i64()));
        Self(attributes)
    }
}

/// Product together with its reviews.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsBody {
    pub product_details: ProductView,
    pub reviews: Vec<ReviewBody>,
}

impl From<ProductDetails> for ProductDetailsBody {
    fn from(value: ProductDetails) -> Self {
        Self {
            product_details: ProductView::from(value.product),
            reviews: value.reviews.into_iter().map(ReviewBody::from).collect(),
        }
    }
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductBody,
    responses(
        (status = 201, description = "Product created",
            headers(("Location" = String, description = "Path of the new product"))),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 503, description = "Product store unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductBody>,
) -> ApiResult<HttpResponse> {
    let product = state
        .products
        .create_product(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/products/{}", product.id())))
        .finish())
}

/// Fetch a product with its reviews.
///
/// Review service failures are not errors here: the product is returned with
/// an empty review list.
#[utoipa::path(
    get,
    path = "/product/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product and reviews", body = ProductDetailsBody),
        (status = 404, description = "Unknown product", body = ErrorSchema),
        (status = 503, description = "Product store unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProductDetails"
)]
#[get("/product/{id}")]
pub async fn product_details(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ProductDetailsBody>> {
    let id = ProductId::new(path.into_inner());
    let details = state.product_query.product_details(id).await?;
    Ok(web::Json(details.into()))
}

/// Update a product.
///
/// Empty `name` or `description` values keep the stored ones.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = ProductBody,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 404, description = "Unknown product", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[put("/products/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ProductBody>,
) -> ApiResult<HttpResponse> {
    let id = ProductId::new(path.into_inner());
    state
        .products
        .update_product(id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a product. Unknown identifiers also answer 200.
#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted or never existed"),
        (status = 503, description = "Product store unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/product/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .products
        .delete_product(ProductId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
