//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use product_service::outbound::persistence::{DbPool, DieselProductRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/products")).await?;
//! run_migrations("postgres://localhost/products").await?;
//! let repo = DieselProductRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_product_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_product_repository::DieselProductRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
