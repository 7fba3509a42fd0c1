//! Driven port resolving logical service names to base addresses.
//!
//! Implementations decide which registered instance answers a lookup; callers
//! only receive a base URL for the next request.

use async_trait::async_trait;
use url::Url;

use super::define_port_error;

/// Logical name under which the review service registers.
pub const REVIEW_SERVICE_NAME: &str = "REVIEW-SERVICE";

define_port_error! {
    /// Errors raised while resolving a service.
    pub enum ServiceLocatorError {
        /// The service name is not known to the registry.
        UnknownService { service: String } =>
            "service {service} is not registered",
        /// The service is known but has no usable instance.
        NoInstances { service: String } =>
            "service {service} has no available instances",
        /// The registry itself could not be queried.
        Registry { message: String } =>
            "service registry lookup failed: {message}",
    }
}

/// Port resolving a logical service name to one instance's base URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceLocator: Send + Sync {
    /// Return the base URL of the instance to use for the next call.
    async fn resolve(&self, service: &str) -> Result<Url, ServiceLocatorError>;
}
