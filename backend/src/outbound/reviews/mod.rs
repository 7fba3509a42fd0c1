//! Remote review service adapter.
//!
//! Implements the `ReviewSource` port over HTTP, resolving the review service
//! through a `ServiceLocator` before every call.

mod dto;
mod http_source;

pub use http_source::HttpReviewSource;
