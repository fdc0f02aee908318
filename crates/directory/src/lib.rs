//! Remote employee directory access.

pub mod client;
pub mod config;

pub use client::{DirectoryClient, DirectoryError, Employee, HttpDirectoryClient};
pub use config::DirectoryConfig;
