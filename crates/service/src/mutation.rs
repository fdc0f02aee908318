//! Write side: create and token-guarded update.

use std::sync::Arc;

use catalog_core::{CatalogError, CatalogResult, ConcurrencyGuard, ProductId, VersionToken};
use catalog_products::{Product, ProductDraft, ProductValidator};
use catalog_store::ProductStore;

/// Create and update operations over the product store.
pub struct MutationService {
    store: Arc<dyn ProductStore>,
    validator: Arc<dyn ProductValidator>,
}

impl MutationService {
    pub fn new(store: Arc<dyn ProductStore>, validator: Arc<dyn ProductValidator>) -> Self {
        Self { store, validator }
    }

    /// Validate and store a new product. No token is involved; the stored
    /// entity starts at revision zero.
    pub async fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        self.validator
            .validate(&draft)
            .map_err(CatalogError::validation)?;

        let product = Product::from_draft(ProductId::new(), draft);
        let stored = self.store.save(product, ConcurrencyGuard::Any).await?;
        tracing::info!(id = %stored.id, "product created");
        Ok(stored)
    }

    /// Token-guarded update.
    ///
    /// The raw token is parsed first, then the draft is validated, the entity
    /// located and its revision compared against the token. Only the mutable
    /// draft fields are overlaid; the store re-checks the revision once more
    /// when committing, so a concurrent writer cannot slip in between.
    pub async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
        raw_token: Option<&str>,
    ) -> CatalogResult<Product> {
        let token = VersionToken::parse(raw_token)?;

        self.validator
            .validate(&draft)
            .map_err(CatalogError::validation)?;

        let mut stored = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(format!("product {id}")))?;

        let guard = ConcurrencyGuard::from(token);
        guard.check(stored.revision)?;

        stored.overlay(draft);
        let updated = self.store.save(stored, guard).await?;
        tracing::info!(id = %updated.id, revision = %updated.revision, "product updated");
        Ok(updated)
    }
}
