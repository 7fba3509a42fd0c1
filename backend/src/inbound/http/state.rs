//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they only depend on
//! driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ProductCommand, ProductQuery, ReviewCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn ProductCommand>,
    pub product_query: Arc<dyn ProductQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
}

impl HttpState {
    /// Bundle individually supplied ports.
    pub fn new(
        products: Arc<dyn ProductCommand>,
        product_query: Arc<dyn ProductQuery>,
        reviews: Arc<dyn ReviewCommand>,
    ) -> Self {
        Self {
            products,
            product_query,
            reviews,
        }
    }

    /// Use one service for every port.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ProductCommand + ProductQuery + ReviewCommand + 'static,
    {
        Self {
            products: service.clone(),
            product_query: service.clone(),
            reviews: service,
        }
    }
}
