//! In-process adapters for running without external infrastructure.
//!
//! Both stores keep their state behind a `Mutex`; they are meant for local
//! development and tests rather than multi-instance deployments.

mod product_store;
mod review_store;

pub use product_store::InMemoryProductRepository;
pub use review_store::LocalReviewStore;
