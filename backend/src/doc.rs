//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects the product, review and health endpoints plus the
//! error schemas. Swagger UI serves it in debug builds, and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::products::{ProductBody, ProductDetailsBody, ProductView, ReviewBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product service API",
        description = "Product catalogue with reviews aggregated from the review service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::product_details,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::reviews::submit_review,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ProductBody,
        ProductView,
        ProductDetailsBody,
        ReviewBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "products", description = "Product catalogue operations"),
        (name = "reviews", description = "Review submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
