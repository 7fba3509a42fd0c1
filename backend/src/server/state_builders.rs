//! Builders choosing adapters from the loaded settings.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use product_service::domain::ProductService;
use product_service::domain::ports::{ProductRepository, ReviewSource, ServiceLocator};
use product_service::inbound::http::state::HttpState;
use product_service::outbound::memory::{InMemoryProductRepository, LocalReviewStore};
use product_service::outbound::persistence::{DbPool, DieselProductRepository};
use product_service::outbound::registry::{EurekaServiceLocator, StaticServiceLocator};
use product_service::outbound::reviews::HttpReviewSource;
use product_service::settings::ServiceSettings;

fn io_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

/// Pick the service locator: a registry when one is configured, otherwise a
/// static instance list, otherwise none.
fn build_locator(settings: &ServiceSettings) -> std::io::Result<Option<Arc<dyn ServiceLocator>>> {
    if let Some(registry) = settings.registry_url().map_err(io_error)? {
        info!(%registry, "resolving review service through registry");
        let locator = EurekaServiceLocator::new(registry, settings.request_timeout())
            .map_err(io_error)?;
        return Ok(Some(Arc::new(locator)));
    }

    let instances = settings.review_instances().map_err(io_error)?;
    if instances.is_empty() {
        return Ok(None);
    }
    info!(count = instances.len(), "resolving review service from static instances");
    Ok(Some(Arc::new(
        StaticServiceLocator::new().with_service(settings.review_service_name(), instances),
    )))
}

/// Build the review source: remote when a locator is available, local otherwise.
///
/// # Errors
///
/// Returns an error when a configured URL is invalid or the HTTP client
/// cannot be built.
pub(crate) fn build_review_source(
    settings: &ServiceSettings,
) -> std::io::Result<Arc<dyn ReviewSource>> {
    match build_locator(settings)? {
        Some(locator) => {
            let source = HttpReviewSource::new(
                locator,
                settings.review_service_name(),
                settings.request_timeout(),
            )
            .map_err(io_error)?;
            Ok(Arc::new(source))
        }
        None => {
            warn!("no review service configured; reviews are kept in memory");
            Ok(Arc::new(LocalReviewStore::new()))
        }
    }
}

fn build_product_repository(db_pool: Option<DbPool>) -> Arc<dyn ProductRepository> {
    match db_pool {
        Some(pool) => Arc::new(DieselProductRepository::new(pool)),
        None => {
            warn!("no database configured; products are kept in memory");
            Arc::new(InMemoryProductRepository::new())
        }
    }
}

/// Wire the product service into the HTTP state.
pub(crate) fn build_http_state(
    db_pool: Option<DbPool>,
    review_source: Arc<dyn ReviewSource>,
) -> web::Data<HttpState> {
    let service = Arc::new(ProductService::new(
        build_product_repository(db_pool),
        review_source,
    ));
    web::Data::new(HttpState::from_service(service))
}
