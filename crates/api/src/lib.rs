//! HTTP surface of the product catalog: Axum router, handlers, and
//! request/response mapping.

pub mod app;
