//! Application wiring for the HTTP API.
//!
//! - `services.rs`: construction of the store, directory client, and domain services
//! - `routes/`: HTTP routes and handlers
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Assemble the full router around an already-wired service set.
///
/// Taking the services as an argument keeps the wiring swappable: `main`
/// passes the environment-configured set, tests pass one pointed at a
/// stub directory.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .layer(ServiceBuilder::new())
}
