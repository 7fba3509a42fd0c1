//! Product service library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] owns entities, ports and
//! the aggregation service, [`inbound`] exposes them over HTTP and
//! [`outbound`] provides the storage, review and registry adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
