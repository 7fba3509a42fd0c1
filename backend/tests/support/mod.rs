//! Shared helpers for the backend integration tests.

mod cluster_skip;

pub use cluster_skip::handle_cluster_setup_failure;
