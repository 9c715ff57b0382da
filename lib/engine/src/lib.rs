//! # modista Engine
//!
//! The ranking engines on top of [`modista_similarity`]:
//!
//! - [`Recommender`] - profile-to-product ranking with post-hoc filters
//! - [`find_similar`] - rank a candidate pool against one target product
//! - [`trending`] - interaction-count x rating trending ranker
//!
//! All engines score copies of their input; the caller's product list and
//! its elements are never mutated. Scoring failures degrade to deterministic
//! fallbacks at these boundaries rather than propagating.
//!
//! ## Example
//!
//! ```rust
//! use modista_core::{FilterSet, Product, UserProfile};
//! use modista_engine::Recommender;
//!
//! let profile = UserProfile {
//!     interests: vec!["denim".into()],
//!     ..Default::default()
//! };
//! let candidates = vec![
//!     Product::new("1", "Denim Jacket", "Casual Wear"),
//!     Product::new("2", "Silk Tie", "Formal Wear"),
//! ];
//!
//! let ranked = Recommender::new().rank(&profile, &candidates, &FilterSet::default(), None);
//! assert_eq!(ranked[0].id, "1");
//! ```

pub mod recommend;
pub mod similar;
pub mod trending;

pub use recommend::{Recommender, DEFAULT_TOP_N};
pub use similar::{find_similar, DEFAULT_SIMILAR_N};
pub use trending::{log_interactions, trending, Interaction, DEFAULT_TRENDING_N};
