//! `ProductRepository` backed by a `BTreeMap`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft, ProductId};

#[derive(Debug)]
struct State {
    next_id: i64,
    products: BTreeMap<ProductId, Product>,
}

/// Product store living in process memory.
///
/// Identities are assigned sequentially from 1.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    state: Mutex<State>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                products: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryProductRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `products`.
    ///
    /// Later creations receive identities above the largest seeded one.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<_, _> = products
            .into_iter()
            .map(|product| (product.id(), product))
            .collect();
        let next_id = products
            .keys()
            .next_back()
            .map_or(1, |id| id.as_i64().saturating_add(1));
        Self {
            state: Mutex::new(State { next_id, products }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, ProductRepositoryError> {
        self.state
            .lock()
            .map_err(|_| ProductRepositoryError::query("product store lock poisoned"))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(self.lock()?.products.get(&id).cloned())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut state = self.lock()?;
        let id = ProductId::new(state.next_id);
        state.next_id = state.next_id.saturating_add(1);
        let product = Product::new(id, draft.clone());
        state.products.insert(id, product.clone());
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<(), ProductRepositoryError> {
        self.lock()?.products.insert(product.id(), product.clone());
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductRepositoryError> {
        self.lock()?.products.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn create_assigns_sequential_identities() {
        let repo = InMemoryProductRepository::new();

        let first = repo
            .create(&ProductDraft::new("Widget", "A widget"))
            .await
            .expect("create");
        let second = repo
            .create(&ProductDraft::new("Gadget", "A gadget"))
            .await
            .expect("create");

        assert_eq!(first.id(), ProductId::new(1));
        assert_eq!(second.id(), ProductId::new(2));
        assert_eq!(
            repo.find_by_id(ProductId::new(2)).await.expect("find"),
            Some(second)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_store_continues_after_highest_identity() {
        let repo = InMemoryProductRepository::with_products([Product::new(
            ProductId::new(5),
            ProductDraft::new("Widget", "A widget"),
        )]);

        let created = repo.create(&ProductDraft::default()).await.expect("create");

        assert_eq!(created.id(), ProductId::new(6));
    }

    #[rstest]
    #[tokio::test]
    async fn save_replaces_and_delete_removes() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(&ProductDraft::new("Widget", "A widget"))
            .await
            .expect("create");
        let updated = created.merge_update(ProductDraft::new("Gizmo", ""));

        repo.save(&updated).await.expect("save");
        assert_eq!(
            repo.find_by_id(created.id()).await.expect("find"),
            Some(updated)
        );

        repo.delete(created.id()).await.expect("delete");
        repo.delete(created.id()).await.expect("second delete is a no-op");
        assert_eq!(repo.find_by_id(created.id()).await.expect("find"), None);
    }
}
