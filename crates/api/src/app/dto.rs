use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use catalog_core::EmployeeId;
use catalog_products::{Product, ProductDraft, Turnover};

// -------------------------
// Request DTOs
// -------------------------

/// Create/update payload.
///
/// `turnover` and `owner_id` only take effect on create; updates keep
/// the stored values.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub homepage: Option<String>,
    pub turnover: Option<Turnover>,
    pub owner_id: Option<EmployeeId>,
}

impl ProductPayload {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            release_date: self.release_date,
            homepage: self.homepage,
            turnover: self.turnover,
            owner_id: self.owner_id,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub revision: i32,
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub homepage: Option<String>,
    pub turnover: Option<Turnover>,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            revision: product.revision.value(),
            name: product.name,
            release_date: product.release_date,
            homepage: product.homepage,
            turnover: product.turnover,
            owner_id: product.owner_id.map(|id| id.to_string()),
            owner_name: product.owner_name,
            owner_email: product.owner_email,
        }
    }
}
