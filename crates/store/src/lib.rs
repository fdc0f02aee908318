//! Product persistence seam and its in-memory implementation.

pub mod product_store;
pub mod seed;

pub use product_store::{InMemoryProductStore, ProductStore};
