//! Product catalog domain: entity, client drafts, validation, search criteria.

pub mod criteria;
pub mod product;
pub mod validate;

pub use criteria::{ProductPredicate, SearchCriteria};
pub use product::{Product, ProductDraft, Turnover};
pub use validate::{NAME_MAX_LEN, NAME_PATTERN, ProductValidator, RuleValidator};
