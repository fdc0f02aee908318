//! Two-channel client for the remote employee directory.
//!
//! Channel A is plain request/response: `GET {base}/{id}` returns the
//! employee summary. Channel B posts a query document and extracts the email
//! from the response envelope. The channels fail independently, and callers
//! must treat not-found (`Ok(None)`) and transport failure (`Err`) as
//! different outcomes.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use catalog_core::EmployeeId;

use crate::config::DirectoryConfig;

/// Employee summary as served by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
    pub name: String,
    pub email: Option<String>,
}

/// Lookup seam for the employee directory.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Summary channel. `Ok(None)` means the directory answered and knows
    /// no such employee.
    async fn fetch_employee(&self, id: EmployeeId) -> Result<Option<Employee>, DirectoryError>;

    /// Email channel. `Ok(None)` covers unknown employees and employees
    /// without a stored email.
    async fn fetch_email(&self, id: EmployeeId) -> Result<Option<String>, DirectoryError>;
}

/// reqwest-backed implementation speaking to a live directory.
pub struct HttpDirectoryClient {
    config: DirectoryConfig,
    client: reqwest::Client,
}

impl HttpDirectoryClient {
    pub fn new(config: DirectoryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build http client");
        Self { config, client }
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn fetch_employee(&self, id: EmployeeId) -> Result<Option<Employee>, DirectoryError> {
        let url = format!("{}/{}", self.config.rest_base_url, id);
        tracing::debug!(%id, "directory summary lookup");

        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(DirectoryError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let employee: Employee = resp
            .json()
            .await
            .map_err(|e| DirectoryError::Parse(e.to_string()))?;
        Ok(Some(employee))
    }

    async fn fetch_email(&self, id: EmployeeId) -> Result<Option<String>, DirectoryError> {
        let body = json!({
            "query": format!("{{ employee(id: \"{id}\") {{ email }} }}"),
        });
        tracing::debug!(%id, "directory email lookup");

        let resp = self
            .client
            .post(&self.config.query_url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&body)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DirectoryError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let envelope: QueryEnvelope = resp
            .json()
            .await
            .map_err(|e| DirectoryError::Parse(e.to_string()))?;
        Ok(envelope.email())
    }
}

/// Response envelope of the query-document channel.
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    data: Option<QueryData>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    employee: Option<QueryEmployee>,
}

#[derive(Debug, Deserialize)]
struct QueryEmployee {
    email: Option<String>,
}

impl QueryEnvelope {
    /// Field-level absence anywhere in the envelope is a normal "no email"
    /// outcome, the same way the directory reports unknown ids.
    fn email(self) -> Option<String> {
        self.data?.employee?.email
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("directory API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<DirectoryError> for catalog_core::CatalogError {
    fn from(err: DirectoryError) -> Self {
        catalog_core::CatalogError::unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_email_yields_it() {
        let envelope: QueryEnvelope =
            serde_json::from_str(r#"{"data":{"employee":{"email":"alpha@acme.com"}}}"#).unwrap();
        assert_eq!(envelope.email().as_deref(), Some("alpha@acme.com"));
    }

    #[test]
    fn envelope_with_null_employee_yields_none() {
        let envelope: QueryEnvelope =
            serde_json::from_str(r#"{"data":{"employee":null}}"#).unwrap();
        assert_eq!(envelope.email(), None);
    }

    #[test]
    fn envelope_with_errors_only_yields_none() {
        let envelope: QueryEnvelope =
            serde_json::from_str(r#"{"errors":[{"message":"unknown id"}]}"#).unwrap();
        assert_eq!(envelope.email(), None);
    }

    #[test]
    fn envelope_with_missing_email_field_yields_none() {
        let envelope: QueryEnvelope = serde_json::from_str(r#"{"data":{"employee":{}}}"#).unwrap();
        assert_eq!(envelope.email(), None);
    }
}
