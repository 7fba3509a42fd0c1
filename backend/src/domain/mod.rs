//! Domain primitives, ports and services.
//!
//! Purpose: define the product and review types shared by the HTTP adapter
//! and the outbound adapters, plus the service that aggregates a product with
//! its reviews. Types here stay transport agnostic; serialisation contracts
//! live with the adapters that own the wire format.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - Product / ProductDraft / ProductId: the stored entity and its inputs.
//! - Review / ReviewReceipt: opaque review records and submission outcomes.
//! - ProductService: implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod product;
mod product_service;
pub mod review;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::product::{Product, ProductDraft, ProductId};
pub use self::product_service::ProductService;
pub use self::review::{Review, ReviewId, ReviewReceipt};
pub use self::trace_id::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
