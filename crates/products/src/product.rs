use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{EmployeeId, ProductId, Revision};

/// Yearly turnover attributed to a product. Fixed at create time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turnover {
    pub amount: f64,
    pub currency: String,
}

/// Catalog entity: Product.
///
/// `owner_name` and `owner_email` hold enrichment results from the remote
/// directory. They are never at rest: the store blanks them on save and the
/// read service recomputes them on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub revision: Revision,
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub homepage: Option<String>,
    pub turnover: Option<Turnover>,
    pub owner_id: Option<EmployeeId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl Product {
    /// Build a fresh entity from a client draft.
    ///
    /// Revision starts at zero; the store refreshes the timestamps when the
    /// entity is first saved.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            revision: Revision::initial(),
            name: draft.name,
            release_date: draft.release_date,
            homepage: draft.homepage,
            turnover: draft.turnover,
            owner_id: draft.owner_id,
            created_at: now,
            updated_at: now,
            owner_name: None,
            owner_email: None,
        }
    }

    /// Copy the mutable fields of a draft onto this entity.
    ///
    /// Identity, revision, turnover, owner and creation time are fixed at
    /// create time and stay untouched.
    pub fn overlay(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.release_date = draft.release_date;
        self.homepage = draft.homepage;
    }

    /// Drop enrichment results. The store applies this before putting an
    /// entity at rest.
    pub fn strip_enrichment(&mut self) {
        self.owner_name = None;
        self.owner_email = None;
    }
}

/// Client-supplied product fields, shared by create and update payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub homepage: Option<String>,
    pub turnover: Option<Turnover>,
    pub owner_id: Option<EmployeeId>,
}
