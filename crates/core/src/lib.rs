//! Domain foundation of the product catalog.
//!
//! This crate contains **pure domain** primitives (no transport or storage
//! concerns): typed identifiers, the error taxonomy, and the revision /
//! version-token machinery for optimistic concurrency.

pub mod error;
pub mod id;
pub mod revision;

pub use error::{CatalogError, CatalogResult, Violation};
pub use id::{EmployeeId, ProductId};
pub use revision::{ConcurrencyGuard, Revision, VersionToken};
