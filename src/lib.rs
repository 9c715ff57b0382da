//! # modista
//!
//! A fashion recommendation and sizing engine.
//!
//! modista ranks fashion products against a user's stated preferences with a
//! hybrid semantic + lexical similarity measure, finds products similar to a
//! given item, and classifies body measurements into garment sizes.
//!
//! ## Quick Start
//!
//! ```rust
//! use modista::prelude::*;
//!
//! let profile = UserProfile {
//!     interests: vec!["streetwear".into(), "denim".into()],
//!     fashion_style: Some("minimalist".into()),
//!     gender: Gender::Male,
//! };
//!
//! let candidates = vec![
//!     Product::new("1", "Streetwear Graphic Hoodie", "Streetwear")
//!         .with_tags(vec!["urban".into()])
//!         .with_price(48.99),
//!     Product::new("2", "Formal Silk Tie", "Formal Wear").with_price(19.99),
//! ];
//!
//! let ranked = Recommender::new().rank(&profile, &candidates, &FilterSet::default(), None);
//! assert_eq!(ranked[0].id, "1");
//! ```
//!
//! ## Crate Structure
//!
//! modista is composed of several crates:
//!
//! - [`modista-core`](https://docs.rs/modista-core) - Data model, filters, text normalization
//! - [`modista-similarity`](https://docs.rs/modista-similarity) - TF-IDF space, embeddings, hybrid scoring
//! - [`modista-engine`](https://docs.rs/modista-engine) - Recommendation, similar-item, and trending rankers
//! - [`modista-sizing`](https://docs.rs/modista-sizing) - Size charts and measurement classification
//! - [`modista-supply`](https://docs.rs/modista-supply) - Product source contract and TTL caching
//!
//! ## Features
//!
//! - **Hybrid Scoring**: 0.7 semantic + 0.3 lexical when an embedding
//!   provider is plugged in, graceful fallback to pure TF-IDF otherwise
//! - **Call-Scoped Vector Space**: the lexical vocabulary is refit per
//!   request, never cached across candidate sets
//! - **Deterministic Degradation**: scoring failures produce neutral-score
//!   fallbacks, never errors
//! - **Rule-Based Sizing**: range-fit scoring against fixed size charts
//!   with an explicit larger-size tie-break

// Re-export core types
pub use modista_core::{Error, FilterSet, Gender, PriceRange, Product, Result, UserProfile};

// Re-export engines
pub use modista_engine::{find_similar, log_interactions, trending, Interaction, Recommender};
pub use modista_similarity::{
    EmbeddingProvider, HashEmbedder, NullEmbedder, SimilarityEngine, TfidfVectorizer,
};
pub use modista_sizing::{classify, BodyType, Measurements, SizeLabel, SizeRecommendation};
pub use modista_supply::{CachedSource, ProductSource, TtlCache};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        classify, find_similar, trending, BodyType, CachedSource, EmbeddingProvider, Error,
        FilterSet, Gender, HashEmbedder, Interaction, Measurements, NullEmbedder, PriceRange,
        Product, ProductSource, Recommender, Result, SimilarityEngine, SizeLabel,
        SizeRecommendation, TtlCache, UserProfile,
    };
}

/// Text normalization helpers
pub mod text {
    pub use modista_core::text::{product_text, profile_text};
}
