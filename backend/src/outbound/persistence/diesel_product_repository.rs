//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft, ProductId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewProductRow, ProductRecord, ProductRow, ProductUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::products;

/// Diesel-backed implementation of the product repository port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    map_basic_pool_error(error, ProductRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ProductRepositoryError {
    map_basic_diesel_error(
        error,
        ProductRepositoryError::query,
        ProductRepositoryError::connection,
    )
}

fn row_to_product(row: ProductRow) -> Product {
    let ProductRow {
        id,
        name,
        description,
    } = row;
    Product::new(ProductId::new(id), ProductDraft { name, description })
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = products::table
            .filter(products::id.eq(id.as_i64()))
            .select(ProductRow::as_select())
            .first::<ProductRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_product))
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(products::table)
            .values(&NewProductRow {
                name: &draft.name,
                description: &draft.description,
            })
            .returning(ProductRow::as_returning())
            .get_result::<ProductRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_product(row))
    }

    async fn save(&self, product: &Product) -> Result<(), ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let record = ProductRecord {
            id: product.id().as_i64(),
            name: product.name(),
            description: product.description(),
        };
        let update = ProductUpdate {
            name: product.name(),
            description: product.description(),
            updated_at: Utc::now(),
        };

        diesel::insert_into(products::table)
            .values(&record)
            .on_conflict(products::id)
            .do_update()
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(products::table.filter(products::id.eq(id.as_i64())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
