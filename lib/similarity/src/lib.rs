//! # modista Similarity
//!
//! The hybrid semantic/lexical similarity engine behind modista's
//! recommendation and similar-item ranking.
//!
//! ## Features
//!
//! - **Call-scoped TF-IDF**: a bounded-vocabulary vector space (stop words
//!   removed, unigrams + bigrams) refit from scratch on every call, because
//!   the candidate set changes per request and a stale vocabulary would
//!   silently skew scores
//! - **Pluggable embeddings**: the [`EmbeddingProvider`] capability trait
//!   with a no-op default; absence is a supported degradation path, not an
//!   error
//! - **Hybrid scoring**: `0.7 * semantic + 0.3 * lexical` per candidate when
//!   a semantic score was computed and is positive, pure lexical otherwise
//!
//! ## Example
//!
//! ```rust
//! use modista_similarity::SimilarityEngine;
//!
//! let engine = SimilarityEngine::new();
//! let docs = vec![
//!     "denim jacket casual wear".to_string(),
//!     "formal silk tie office".to_string(),
//! ];
//! let scores = engine.score("casual denim streetwear", &docs).unwrap();
//! assert!(scores[0].relevance > scores[1].relevance);
//! ```

pub mod embed;
pub mod engine;
pub mod tfidf;

pub use embed::{cosine_similarity, EmbeddingProvider, HashEmbedder, NullEmbedder};
pub use engine::{CandidateScores, SimilarityEngine};
pub use tfidf::{SparseVector, TfidfVectorizer, MAX_FEATURES};
