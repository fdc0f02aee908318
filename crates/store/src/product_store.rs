use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use catalog_core::{CatalogError, CatalogResult, ConcurrencyGuard, ProductId, Revision};
use catalog_products::{Product, ProductPredicate};

/// Storage seam for products.
///
/// `save` is the only mutating operation. With `ConcurrencyGuard::Exact` it
/// re-checks the stored revision and increments it under the same lock, so a
/// guard that passed at the service layer cannot be raced by a concurrent
/// writer.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;
    async fn find_matching(&self, predicate: ProductPredicate) -> CatalogResult<Vec<Product>>;
    /// Distinct product names starting with the prefix (case-insensitive),
    /// sorted.
    async fn find_names_by_prefix(&self, prefix: &str) -> CatalogResult<Vec<String>>;
    async fn save(&self, product: Product, guard: ConcurrencyGuard) -> CatalogResult<Product>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        (**self).find_all().await
    }

    async fn find_matching(&self, predicate: ProductPredicate) -> CatalogResult<Vec<Product>> {
        (**self).find_matching(predicate).await
    }

    async fn find_names_by_prefix(&self, prefix: &str) -> CatalogResult<Vec<String>> {
        (**self).find_names_by_prefix(prefix).await
    }

    async fn save(&self, product: Product, guard: ConcurrencyGuard) -> CatalogResult<Product> {
        (**self).save(product, guard).await
    }
}

/// In-memory product store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the demo dataset.
    pub fn with_seed() -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.inner.write() {
            for product in crate::seed::products() {
                map.insert(product.id, product);
            }
        }
        store
    }

    fn sorted(mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by_key(|p| *p.id.as_uuid());
        products
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| CatalogError::internal("product store lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| CatalogError::internal("product store lock poisoned"))?;
        Ok(Self::sorted(map.values().cloned().collect()))
    }

    async fn find_matching(&self, predicate: ProductPredicate) -> CatalogResult<Vec<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| CatalogError::internal("product store lock poisoned"))?;
        Ok(Self::sorted(
            map.values().filter(|p| predicate(p)).cloned().collect(),
        ))
    }

    async fn find_names_by_prefix(&self, prefix: &str) -> CatalogResult<Vec<String>> {
        let map = self
            .inner
            .read()
            .map_err(|_| CatalogError::internal("product store lock poisoned"))?;
        let prefix = prefix.to_lowercase();
        let mut names: Vec<String> = map
            .values()
            .filter(|p| p.name.to_lowercase().starts_with(&prefix))
            .map(|p| p.name.clone())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    async fn save(&self, mut product: Product, guard: ConcurrencyGuard) -> CatalogResult<Product> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| CatalogError::internal("product store lock poisoned"))?;

        // Enrichment results never go to rest.
        product.strip_enrichment();
        let now = Utc::now();

        match map.get(&product.id) {
            Some(current) => {
                guard.check(current.revision)?;
                product.revision = current.revision.next();
                product.created_at = current.created_at;
                product.updated_at = now;
            }
            None => {
                if matches!(guard, ConcurrencyGuard::Exact(_)) {
                    return Err(CatalogError::not_found(format!("product {}", product.id)));
                }
                product.revision = Revision::initial();
                product.created_at = now;
                product.updated_at = now;
            }
        }

        map.insert(product.id, product.clone());
        Ok(product)
    }
}
