//! Internal Diesel row structs for the products table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::products;

/// Row struct for reading from the products table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Insertable struct for new products; the database assigns `id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Insertable struct carrying an explicit identity, used for upserts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct ProductRecord<'a> {
    pub id: i64,
    pub name: &'a str,
    pub description: &'a str,
}

/// Changeset applied when an existing product is saved.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = products)]
pub(crate) struct ProductUpdate<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub updated_at: DateTime<Utc>,
}
