use std::sync::Arc;

use catalog_directory::{DirectoryConfig, HttpDirectoryClient};
use catalog_products::RuleValidator;
use catalog_service::{MutationService, ReadService};
use catalog_store::InMemoryProductStore;

/// Shared service set handed to every handler via `Extension`.
pub struct AppServices {
    pub reads: ReadService,
    pub mutations: MutationService,
}

/// Wire the production service set: seeded in-memory store, HTTP
/// directory client, and the rule-based validator.
pub fn build_services(directory: DirectoryConfig) -> AppServices {
    let store = Arc::new(InMemoryProductStore::with_seed());
    let client = Arc::new(HttpDirectoryClient::new(directory));
    let validator = Arc::new(RuleValidator::new());

    AppServices {
        reads: ReadService::new(store.clone(), client),
        mutations: MutationService::new(store, validator),
    }
}
