//! Revisions and client-supplied version tokens for optimistic concurrency.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Monotonic revision of a stored product.
///
/// Starts at zero when an entity is first stored and increases by exactly one
/// on every committed update.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Revision(i32);

impl Revision {
    pub const fn initial() -> Self {
        Self(0)
    }

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// The revision after one committed update.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The quoted wire form, e.g. `"3"`. Clients echo this back as a
    /// version token on subsequent updates.
    pub fn quoted(self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl core::fmt::Display for Revision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A client-supplied version token in parsed form.
///
/// Absence and malformedness are distinct failures: a mutation without any
/// token can be answered with "precondition required", while a token that is
/// present but fails the grammar is a failed precondition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VersionToken(Revision);

impl VersionToken {
    /// Parse a token from an optional raw value.
    ///
    /// The accepted grammar is a decimal integer wrapped in double quotes,
    /// e.g. `"0"` or `"17"`. Anything shorter than three characters, not
    /// quote-wrapped on both ends, or with a non-integer between the quotes
    /// is malformed. Negative revisions parse successfully; they fail the
    /// revision comparison downstream instead.
    pub fn parse(raw: Option<&str>) -> CatalogResult<Self> {
        let raw = raw.ok_or(CatalogError::TokenMissing)?;
        if raw.len() < 3 || !raw.starts_with('"') || !raw.ends_with('"') {
            return Err(CatalogError::malformed_token(raw));
        }
        let value: i32 = raw[1..raw.len() - 1]
            .parse()
            .map_err(|_| CatalogError::malformed_token(raw))?;
        Ok(Self(Revision::new(value)))
    }

    pub fn revision(self) -> Revision {
        self.0
    }
}

/// Optimistic concurrency expectation against a stored product.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConcurrencyGuard {
    /// Skip the revision check (first insert, seeding).
    Any,
    /// Require the stored product to be at an exact revision.
    Exact(Revision),
}

impl ConcurrencyGuard {
    pub fn matches(self, actual: Revision) -> bool {
        match self {
            ConcurrencyGuard::Any => true,
            ConcurrencyGuard::Exact(expected) => expected == actual,
        }
    }

    /// Enforce the expectation, reporting the client-supplied revision on
    /// mismatch. Stale and future revisions both fail.
    pub fn check(self, actual: Revision) -> CatalogResult<()> {
        match self {
            ConcurrencyGuard::Any => Ok(()),
            ConcurrencyGuard::Exact(expected) => {
                if expected == actual {
                    Ok(())
                } else {
                    Err(CatalogError::revision_conflict(expected))
                }
            }
        }
    }
}

impl From<VersionToken> for ConcurrencyGuard {
    fn from(token: VersionToken) -> Self {
        ConcurrencyGuard::Exact(token.revision())
    }
}
