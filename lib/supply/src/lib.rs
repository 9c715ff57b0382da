//! # modista Supply
//!
//! The contract between the ranking core and its product suppliers.
//!
//! The core never fetches anything itself: a [`ProductSource`] collaborator
//! hands it product lists already unified into the [`modista_core::Product`]
//! shape. This crate defines that trait plus the in-memory TTL cache that
//! wraps any source, keyed by a deterministic digest of the request.
//!
//! Network clients, retry policy, and rate limiting live with the
//! collaborator implementations, outside this repository.

pub mod cache;
pub mod source;

pub use cache::{cache_key, TtlCache, DEFAULT_TTL};
pub use source::{CachedSource, ProductSource};
