//! Application services: enriched reads and guarded mutations.

pub mod mutation;
pub mod read;

pub use mutation::MutationService;
pub use read::{FALLBACK_EMAIL, FALLBACK_NAME_FAILURE, FALLBACK_NAME_MISSING, ReadService};
