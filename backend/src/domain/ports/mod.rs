//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`ProductCommand`], [`ProductQuery`], [`ReviewCommand`])
//! are what inbound adapters call. Driven ports ([`ProductRepository`],
//! [`ReviewSource`], [`ServiceLocator`]) are what outbound adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod product_command;
mod product_query;
mod product_repository;
mod review_command;
mod review_source;
mod service_locator;

#[cfg(test)]
pub use product_command::MockProductCommand;
pub use product_command::ProductCommand;
#[cfg(test)]
pub use product_query::MockProductQuery;
pub use product_query::{ProductDetails, ProductQuery};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
#[cfg(test)]
pub use review_command::MockReviewCommand;
pub use review_command::ReviewCommand;
#[cfg(test)]
pub use review_source::MockReviewSource;
pub use review_source::{ReviewSource, ReviewSourceError};
#[cfg(test)]
pub use service_locator::MockServiceLocator;
pub use service_locator::{REVIEW_SERVICE_NAME, ServiceLocator, ServiceLocatorError};
