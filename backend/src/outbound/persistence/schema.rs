//! Diesel table definitions matching `backend/migrations`.
//!
//! Regenerate with `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// Product catalogue.
    ///
    /// The `id` column is a store-assigned `BIGSERIAL`.
    products (id) {
        /// Primary key.
        id -> Int8,
        /// Display name; empty strings are allowed.
        name -> Varchar,
        /// Free-text description; empty strings are allowed.
        description -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
