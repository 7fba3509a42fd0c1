//! HTTP inbound adapter exposing the product REST endpoints.

pub mod error;
pub mod health;
pub mod products;
pub mod reviews;
pub mod schemas;
pub mod state;

pub use error::{ApiResult, json_config};
