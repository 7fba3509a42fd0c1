//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: in-process product and review stores
//! - **persistence**: PostgreSQL product store using Diesel
//! - **registry**: service locators (static list, Eureka registry)
//! - **reviews**: HTTP client for the remote review service
//!
//! Adapters translate between domain types and their wire or storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod registry;
pub mod reviews;
