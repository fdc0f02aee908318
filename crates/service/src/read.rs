//! Read side: lookups plus owner enrichment from the remote directory.

use std::sync::Arc;

use catalog_core::{CatalogError, CatalogResult, EmployeeId, ProductId};
use catalog_directory::{DirectoryClient, Employee};
use catalog_products::{Product, SearchCriteria};
use catalog_store::ProductStore;

/// Shown as owner name when the directory answers but knows no such employee.
pub const FALLBACK_NAME_MISSING: &str = "N/A";
/// Shown as owner name when the summary channel fails at the transport level.
pub const FALLBACK_NAME_FAILURE: &str = "Exception";
/// Shown as owner email when the email channel yields nothing, for whatever
/// reason.
pub const FALLBACK_EMAIL: &str = "N/A";

/// Lookups with owner enrichment recomputed on every read.
pub struct ReadService {
    store: Arc<dyn ProductStore>,
    directory: Arc<dyn DirectoryClient>,
}

impl ReadService {
    pub fn new(store: Arc<dyn ProductStore>, directory: Arc<dyn DirectoryClient>) -> Self {
        Self { store, directory }
    }

    pub async fn find_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        let product = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(format!("product {id}")))?;
        Ok(self.enrich(product).await)
    }

    pub async fn find(&self, criteria: &SearchCriteria) -> CatalogResult<Vec<Product>> {
        let products = if criteria.is_empty() {
            self.store.find_all().await?
        } else {
            match criteria.to_predicate() {
                Some(predicate) => self.store.find_matching(predicate).await?,
                None => Vec::new(),
            }
        };

        if products.is_empty() {
            let what = if criteria.is_empty() {
                "products".to_string()
            } else {
                format!("products matching {}", criteria.describe())
            };
            return Err(CatalogError::not_found(what));
        }

        Ok(self.enrich_many(products).await)
    }

    pub async fn find_names_by_prefix(&self, prefix: &str) -> CatalogResult<Vec<String>> {
        let names = self.store.find_names_by_prefix(prefix).await?;
        if names.is_empty() {
            return Err(CatalogError::not_found(format!(
                "product names with prefix {prefix:?}"
            )));
        }
        Ok(names)
    }

    /// Attach owner name and email.
    ///
    /// Each channel degrades to its sentinel independently; a failing
    /// directory never fails a read. This consumes `DirectoryUnavailable`,
    /// which therefore cannot escape the read path.
    async fn enrich(&self, mut product: Product) -> Product {
        let Some(owner_id) = product.owner_id else {
            return product;
        };

        product.owner_name = Some(match self.owner_summary(owner_id).await {
            Ok(Some(employee)) => employee.name,
            Ok(None) => FALLBACK_NAME_MISSING.to_string(),
            Err(err) => {
                tracing::warn!(%owner_id, error = %err, "summary channel degraded");
                FALLBACK_NAME_FAILURE.to_string()
            }
        });

        product.owner_email = Some(match self.owner_email(owner_id).await {
            Ok(Some(email)) => email,
            Ok(None) => FALLBACK_EMAIL.to_string(),
            Err(err) => {
                tracing::warn!(%owner_id, error = %err, "email channel degraded");
                FALLBACK_EMAIL.to_string()
            }
        });

        product
    }

    /// Enrich every element; a degraded element never short-circuits the rest.
    async fn enrich_many(&self, products: Vec<Product>) -> Vec<Product> {
        let mut enriched = Vec::with_capacity(products.len());
        for product in products {
            enriched.push(self.enrich(product).await);
        }
        enriched
    }

    async fn owner_summary(&self, id: EmployeeId) -> CatalogResult<Option<Employee>> {
        Ok(self.directory.fetch_employee(id).await?)
    }

    async fn owner_email(&self, id: EmployeeId) -> CatalogResult<Option<String>> {
        Ok(self.directory.fetch_email(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_core::ConcurrencyGuard;
    use catalog_directory::DirectoryError;
    use catalog_products::ProductDraft;
    use catalog_store::InMemoryProductStore;

    #[derive(Copy, Clone)]
    enum Channel {
        Found,
        Missing,
        Failing,
    }

    struct ScriptedDirectory {
        summary: Channel,
        email: Channel,
    }

    #[async_trait]
    impl DirectoryClient for ScriptedDirectory {
        async fn fetch_employee(
            &self,
            _id: EmployeeId,
        ) -> Result<Option<Employee>, DirectoryError> {
            match self.summary {
                Channel::Found => Ok(Some(Employee {
                    name: "Admin".to_string(),
                    email: Some("admin@acme.com".to_string()),
                })),
                Channel::Missing => Ok(None),
                Channel::Failing => {
                    Err(DirectoryError::Network("connection refused".to_string()))
                }
            }
        }

        async fn fetch_email(&self, _id: EmployeeId) -> Result<Option<String>, DirectoryError> {
            match self.email {
                Channel::Found => Ok(Some("admin@acme.com".to_string())),
                Channel::Missing => Ok(None),
                Channel::Failing => {
                    Err(DirectoryError::Network("connection refused".to_string()))
                }
            }
        }
    }

    fn draft(name: &str, owner_id: Option<EmployeeId>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            release_date: None,
            homepage: None,
            turnover: None,
            owner_id,
        }
    }

    async fn seeded_service(
        summary: Channel,
        email: Channel,
        owner_id: Option<EmployeeId>,
    ) -> (ReadService, ProductId) {
        let store = Arc::new(InMemoryProductStore::new());
        let stored = store
            .save(
                Product::from_draft(ProductId::new(), draft("Alpha", owner_id)),
                ConcurrencyGuard::Any,
            )
            .await
            .unwrap();

        let service = ReadService::new(store, Arc::new(ScriptedDirectory { summary, email }));
        (service, stored.id)
    }

    #[tokio::test]
    async fn enriches_from_both_channels_when_the_directory_answers() {
        let (service, id) =
            seeded_service(Channel::Found, Channel::Found, Some(EmployeeId::new())).await;

        let product = service.find_by_id(id).await.unwrap();

        assert_eq!(product.owner_name.as_deref(), Some("Admin"));
        assert_eq!(product.owner_email.as_deref(), Some("admin@acme.com"));
    }

    #[tokio::test]
    async fn unknown_owner_maps_to_the_missing_sentinels() {
        let (service, id) =
            seeded_service(Channel::Missing, Channel::Missing, Some(EmployeeId::new())).await;

        let product = service.find_by_id(id).await.unwrap();

        assert_eq!(product.owner_name.as_deref(), Some(FALLBACK_NAME_MISSING));
        assert_eq!(product.owner_email.as_deref(), Some(FALLBACK_EMAIL));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_the_failure_sentinels() {
        let (service, id) =
            seeded_service(Channel::Failing, Channel::Failing, Some(EmployeeId::new())).await;

        let product = service.find_by_id(id).await.unwrap();

        assert_eq!(product.owner_name.as_deref(), Some(FALLBACK_NAME_FAILURE));
        assert_eq!(product.owner_email.as_deref(), Some(FALLBACK_EMAIL));
    }

    #[tokio::test]
    async fn channels_degrade_independently() {
        let (service, id) =
            seeded_service(Channel::Failing, Channel::Found, Some(EmployeeId::new())).await;

        let product = service.find_by_id(id).await.unwrap();

        assert_eq!(product.owner_name.as_deref(), Some(FALLBACK_NAME_FAILURE));
        assert_eq!(product.owner_email.as_deref(), Some("admin@acme.com"));
    }

    #[tokio::test]
    async fn products_without_owner_stay_unenriched() {
        let (service, id) = seeded_service(Channel::Failing, Channel::Failing, None).await;

        let product = service.find_by_id(id).await.unwrap();

        assert!(product.owner_name.is_none());
        assert!(product.owner_email.is_none());
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let (service, _) = seeded_service(Channel::Found, Channel::Found, None).await;

        let err = service.find_by_id(ProductId::new()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn find_with_empty_criteria_returns_everything_enriched() {
        let store = Arc::new(InMemoryProductStore::new());
        for name in ["Alpha", "Beta"] {
            store
                .save(
                    Product::from_draft(ProductId::new(), draft(name, Some(EmployeeId::new()))),
                    ConcurrencyGuard::Any,
                )
                .await
                .unwrap();
        }
        let service = ReadService::new(
            store,
            Arc::new(ScriptedDirectory {
                summary: Channel::Failing,
                email: Channel::Failing,
            }),
        );

        let products = service.find(&SearchCriteria::new()).await.unwrap();

        assert_eq!(products.len(), 2);
        for product in products {
            assert_eq!(product.owner_name.as_deref(), Some(FALLBACK_NAME_FAILURE));
            assert_eq!(product.owner_email.as_deref(), Some(FALLBACK_EMAIL));
        }
    }

    #[tokio::test]
    async fn find_by_name_criterion_filters() {
        let store = Arc::new(InMemoryProductStore::new());
        for name in ["Alpha", "Beta"] {
            store
                .save(
                    Product::from_draft(ProductId::new(), draft(name, None)),
                    ConcurrencyGuard::Any,
                )
                .await
                .unwrap();
        }
        let service = ReadService::new(
            store,
            Arc::new(ScriptedDirectory {
                summary: Channel::Found,
                email: Channel::Found,
            }),
        );

        let criteria = SearchCriteria::from_pairs([("name", "alph")]);
        let products = service.find(&criteria).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Alpha");
    }

    #[tokio::test]
    async fn find_without_matches_is_not_found() {
        let (service, _) = seeded_service(Channel::Found, Channel::Found, None).await;

        let criteria = SearchCriteria::from_pairs([("name", "zz")]);
        let err = service.find(&criteria).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn find_with_unsupported_criteria_is_not_found() {
        let (service, _) = seeded_service(Channel::Found, Channel::Found, None).await;

        let criteria = SearchCriteria::from_pairs([("colour", "red")]);
        let err = service.find(&criteria).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn name_prefix_misses_are_not_found() {
        let (service, _) = seeded_service(Channel::Found, Channel::Found, None).await;

        let err = service.find_names_by_prefix("zz").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));

        let names = service.find_names_by_prefix("al").await.unwrap();
        assert_eq!(names, vec!["Alpha".to_string()]);
    }
}
