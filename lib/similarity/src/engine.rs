//! Hybrid scoring engine
//!
//! Combines the call-scoped TF-IDF space with the optional embedding
//! capability. Failures surface as [`Error::Scoring`] so callers can apply
//! their deterministic fallbacks at the boundary instead of hiding control
//! flow in here.

use std::sync::Arc;

use tracing::debug;

use modista_core::Result;

use crate::embed::{cosine_similarity, EmbeddingProvider, NullEmbedder};
use crate::tfidf::TfidfVectorizer;

/// Weight of the semantic signal in the hybrid score.
const SEMANTIC_WEIGHT: f32 = 0.7;
/// Weight of the lexical signal in the hybrid score.
const LEXICAL_WEIGHT: f32 = 0.3;

/// Per-candidate scoring breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScores {
    /// The final score: hybrid when a semantic score was computed and is
    /// positive, otherwise the lexical score alone.
    pub relevance: f32,
    pub semantic: f32,
    pub tfidf: f32,
}

/// Similarity engine scoring one query text against a batch of documents.
///
/// Stateless across calls: every invocation fits a fresh vector space over
/// its own batch, so concurrent use needs no locking.
pub struct SimilarityEngine {
    vectorizer: TfidfVectorizer,
    provider: Arc<dyn EmbeddingProvider>,
}

impl SimilarityEngine {
    /// Engine with the semantic capability absent (pure lexical scoring).
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(Arc::new(NullEmbedder))
    }

    #[must_use]
    pub fn with_provider(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(),
            provider,
        }
    }

    /// Score every document against the query.
    ///
    /// The lexical space is fit jointly over `[query, documents..]`. When the
    /// provider embeds both the query and a document, that document's final
    /// score blends `0.7 * semantic + 0.3 * lexical`; the blend is
    /// all-or-nothing per document, gated on the semantic score being
    /// computed and positive.
    pub fn score(&self, query: &str, documents: &[String]) -> Result<Vec<CandidateScores>> {
        let tfidf = self.lexical(query, documents)?;
        let semantic = self.semantic(query, documents);

        let scores = tfidf
            .into_iter()
            .enumerate()
            .map(|(i, lexical)| {
                let semantic = semantic.as_ref().map_or(0.0, |s| s[i]);
                let relevance = if semantic > 0.0 {
                    SEMANTIC_WEIGHT * semantic + LEXICAL_WEIGHT * lexical
                } else {
                    lexical
                };
                CandidateScores {
                    relevance,
                    semantic,
                    tfidf: lexical,
                }
            })
            .collect();

        Ok(scores)
    }

    /// Lexical-only cosine scores for every document, from a fresh fit over
    /// `[query, documents..]`.
    pub fn lexical(&self, query: &str, documents: &[String]) -> Result<Vec<f32>> {
        let mut texts = Vec::with_capacity(documents.len() + 1);
        texts.push(query.to_string());
        texts.extend_from_slice(documents);

        let vectors = self.vectorizer.fit_transform(&texts)?;
        let (query_vector, doc_vectors) = vectors.split_first().expect("batch is non-empty");

        Ok(doc_vectors.iter().map(|d| query_vector.cosine(d)).collect())
    }

    /// Semantic cosine scores for every document, or `None` when the
    /// provider cannot embed the query. Documents the provider cannot embed
    /// score `None` individually.
    pub fn semantic_each(&self, query: &str, documents: &[String]) -> Option<Vec<Option<f32>>> {
        let query_embedding = self.provider.embed(query)?;
        Some(
            documents
                .iter()
                .map(|doc| {
                    self.provider
                        .embed(doc)
                        .map(|e| cosine_similarity(&query_embedding, &e))
                })
                .collect(),
        )
    }

    /// Semantic scores with absent embeddings collapsed to 0, or `None` when
    /// the capability is unavailable for the query.
    fn semantic(&self, query: &str, documents: &[String]) -> Option<Vec<f32>> {
        let scores = self.semantic_each(query, documents)?;
        debug!(documents = documents.len(), "semantic scoring active");
        Some(scores.into_iter().map(|s| s.unwrap_or(0.0)).collect())
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::HashEmbedder;

    fn docs() -> Vec<String> {
        vec![
            "casual denim jacket streetwear".to_string(),
            "casual cotton tee shirt".to_string(),
            "formal silk tie office".to_string(),
        ]
    }

    #[test]
    fn test_lexical_orders_by_overlap() {
        let engine = SimilarityEngine::new();
        let scores = engine.score("casual denim streetwear", &docs()).unwrap();
        assert!(scores[0].relevance > scores[1].relevance);
        assert!(scores[1].relevance > scores[2].relevance);
        // With the null provider, semantic is 0 and relevance is pure lexical
        for s in &scores {
            assert_eq!(s.semantic, 0.0);
            assert_eq!(s.relevance, s.tfidf);
        }
    }

    #[test]
    fn test_hybrid_blends_when_semantic_positive() {
        let engine = SimilarityEngine::with_provider(Arc::new(HashEmbedder::new()));
        let scores = engine.score("casual denim jacket", &docs()).unwrap();
        for s in &scores {
            if s.semantic > 0.0 {
                let expected = 0.7 * s.semantic + 0.3 * s.tfidf;
                assert!((s.relevance - expected).abs() < 1e-6);
            } else {
                assert_eq!(s.relevance, s.tfidf);
            }
        }
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let engine = SimilarityEngine::new();
        let scores = engine.score("", &docs()).unwrap();
        assert!(scores.iter().all(|s| s.relevance == 0.0));
    }

    #[test]
    fn test_all_empty_batch_errors() {
        let engine = SimilarityEngine::new();
        assert!(engine.score("", &[String::new()]).is_err());
    }

    #[test]
    fn test_lexical_bounded() {
        let engine = SimilarityEngine::new();
        let scores = engine.lexical("casual denim", &docs()).unwrap();
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }
}
