//! Remote directory endpoint configuration.

use std::time::Duration;

/// Where and how to reach the employee directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the summary channel, e.g. `http://localhost:8080/employees`.
    pub rest_base_url: String,
    /// URL of the query-document channel, e.g. `http://localhost:8080/graphql`.
    pub query_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl DirectoryConfig {
    /// Read the endpoint from `DIRECTORY_SERVICE_HOST` / `DIRECTORY_SERVICE_PORT`,
    /// falling back to `localhost:8080`.
    pub fn from_env() -> Self {
        let host = std::env::var("DIRECTORY_SERVICE_HOST").unwrap_or_else(|_| {
            tracing::warn!("DIRECTORY_SERVICE_HOST not set; using localhost");
            "localhost".to_string()
        });
        let port = std::env::var("DIRECTORY_SERVICE_PORT").unwrap_or_else(|_| {
            tracing::warn!("DIRECTORY_SERVICE_PORT not set; using 8080");
            "8080".to_string()
        });
        Self::for_endpoint(&host, &port)
    }

    /// Endpoint at an explicit host/port. Tests point this at a local stub.
    pub fn for_endpoint(host: &str, port: &str) -> Self {
        Self {
            rest_base_url: format!("http://{host}:{port}/employees"),
            query_url: format!("http://{host}:{port}/graphql"),
            username: "admin".to_string(),
            password: "p".to_string(),
            timeout: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_are_derived_from_host_and_port() {
        let config = DirectoryConfig::for_endpoint("directory.local", "9090");
        assert_eq!(
            config.rest_base_url,
            "http://directory.local:9090/employees"
        );
        assert_eq!(config.query_url, "http://directory.local:9090/graphql");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
