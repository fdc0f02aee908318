//! Catalog error model.

use serde::Serialize;
use thiserror::Error;

use crate::revision::Revision;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (tokens, revisions,
/// validation, lookup misses). Transport failures of the remote directory
/// have their own error type and are translated at the enrichment boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An update arrived without any version token.
    #[error("version token missing")]
    TokenMissing,

    /// A version token was present but failed the quoted-integer grammar.
    #[error("malformed version token: {raw:?}")]
    TokenMalformed { raw: String },

    /// The client-supplied revision does not match the stored one.
    #[error("revision conflict: client supplied {expected}")]
    RevisionConflict { expected: Revision },

    /// A lookup by id or criteria matched nothing.
    #[error("not found: {what}")]
    NotFound { what: String },

    /// One or more field constraints failed.
    #[error("validation failed with {} violation(s)", .violations.len())]
    ValidationFailed { violations: Vec<Violation> },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A remote directory channel failed at the transport level.
    #[error("directory unavailable: {reason}")]
    DirectoryUnavailable { reason: String },

    /// Infrastructure fault (lock poisoning and the like).
    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn malformed_token(raw: impl Into<String>) -> Self {
        Self::TokenMalformed { raw: raw.into() }
    }

    pub fn revision_conflict(expected: Revision) -> Self {
        Self::RevisionConflict { expected }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::ValidationFailed { violations }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            reason: reason.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
