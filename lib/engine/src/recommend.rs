//! Personalized recommendation ranker
//!
//! Orchestrates profile-to-product scoring: normalize texts, score through
//! the similarity engine, attach scores to copies, stable-sort, filter,
//! truncate.

use std::sync::Arc;

use tracing::{debug, warn};

use modista_core::{text, FilterSet, Product, UserProfile};
use modista_similarity::{EmbeddingProvider, SimilarityEngine};

/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 20;

/// Score assigned to every candidate when scoring fails outright.
const NEUTRAL_SCORE: f32 = 0.5;

/// Profile-to-product recommendation ranker.
pub struct Recommender {
    engine: SimilarityEngine,
}

impl Recommender {
    /// Recommender without the semantic capability (pure lexical scoring).
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: SimilarityEngine::new(),
        }
    }

    /// Recommender with a semantic embedding provider plugged in.
    #[must_use]
    pub fn with_provider(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            engine: SimilarityEngine::with_provider(provider),
        }
    }

    /// Rank `candidates` against `profile`, apply `filters`, truncate to
    /// `top_n` (default 20).
    ///
    /// Returns scored copies; the input list and its elements are untouched.
    /// The sort is stable, so equal-scoring candidates keep their input
    /// order. If scoring fails internally, every candidate falls back to a
    /// neutral score of 0.5 in original order - the request always gets an
    /// answer.
    #[must_use]
    pub fn rank(
        &self,
        profile: &UserProfile,
        candidates: &[Product],
        filters: &FilterSet,
        top_n: Option<usize>,
    ) -> Vec<Product> {
        let top_n = top_n.unwrap_or(DEFAULT_TOP_N);
        if candidates.is_empty() {
            return Vec::new();
        }

        let query = text::profile_text(profile);
        let documents: Vec<String> = candidates.iter().map(text::product_text).collect();

        let scores = match self.engine.score(&query, &documents) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(%err, "scoring failed, falling back to neutral scores");
                return candidates
                    .iter()
                    .take(top_n)
                    .map(|p| {
                        let mut copy = p.clone();
                        copy.relevance_score = Some(NEUTRAL_SCORE);
                        copy
                    })
                    .collect();
            }
        };

        let mut scored: Vec<Product> = candidates
            .iter()
            .zip(&scores)
            .map(|(p, s)| {
                let mut copy = p.clone();
                copy.relevance_score = Some(s.relevance);
                copy.semantic_score = Some(s.semantic);
                copy.tfidf_score = Some(s.tfidf);
                copy
            })
            .collect();

        // Stable sort: ties keep input order
        scored.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let filtered = filters.apply(scored);
        debug!(
            candidates = candidates.len(),
            after_filters = filtered.len(),
            "ranked recommendations"
        );

        let mut result = filtered;
        result.truncate(top_n);
        result
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}
