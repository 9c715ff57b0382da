//! Similar-item finder
//!
//! Ranks a candidate pool against one target product. Uses the semantic
//! capability alone when the provider can embed the target, otherwise a
//! fresh lexical fit over [target, pool]. Never errors: the lexical path is
//! the fallback, and a failing lexical path yields an empty result.

use tracing::warn;

use modista_core::{text, Product};
use modista_similarity::SimilarityEngine;

/// Default number of similar products returned.
pub const DEFAULT_SIMILAR_N: usize = 5;

/// Find the products in `pool` most similar to `target`.
///
/// Any pool item sharing the target's `id` is excluded. Results are scored
/// copies with `similarity_score` attached, sorted descending, truncated to
/// `top_n` (default 5).
#[must_use]
pub fn find_similar(
    engine: &SimilarityEngine,
    target: &Product,
    pool: &[Product],
    top_n: Option<usize>,
) -> Vec<Product> {
    let top_n = top_n.unwrap_or(DEFAULT_SIMILAR_N);

    let candidates: Vec<&Product> = pool.iter().filter(|p| p.id != target.id).collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let target_text = text::product_text(target);
    let documents: Vec<String> = candidates.iter().map(|p| text::product_text(p)).collect();

    // Semantic-only when the capability can embed the target; candidates the
    // provider cannot embed are skipped rather than scored 0.
    if let Some(semantic) = engine.semantic_each(&target_text, &documents) {
        let mut scored: Vec<Product> = candidates
            .iter()
            .zip(semantic)
            .filter_map(|(p, score)| {
                score.map(|s| {
                    let mut copy = (*p).clone();
                    copy.similarity_score = Some(s);
                    copy
                })
            })
            .collect();
        sort_and_truncate(&mut scored, top_n);
        return scored;
    }

    // Lexical fallback over a fresh fit of [target, pool]
    match engine.lexical(&target_text, &documents) {
        Ok(scores) => {
            let mut scored: Vec<Product> = candidates
                .iter()
                .zip(scores)
                .map(|(p, s)| {
                    let mut copy = (*p).clone();
                    copy.similarity_score = Some(s);
                    copy
                })
                .collect();
            sort_and_truncate(&mut scored, top_n);
            scored
        }
        Err(err) => {
            warn!(%err, target = %target.id, "similar-item scoring failed");
            Vec::new()
        }
    }
}

fn sort_and_truncate(scored: &mut Vec<Product>, top_n: usize) {
    scored.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use modista_similarity::HashEmbedder;
    use std::sync::Arc;

    fn pool() -> Vec<Product> {
        vec![
            Product::new("t", "Blue Denim Jacket", "Casual Wear"),
            Product::new("1", "Black Denim Jacket", "Casual Wear"),
            Product::new("2", "Denim Jeans", "Casual Wear"),
            Product::new("3", "Formal Silk Tie", "Formal Wear"),
        ]
    }

    #[test]
    fn test_target_excluded_from_results() {
        let target = Product::new("t", "Blue Denim Jacket", "Casual Wear");
        let engine = SimilarityEngine::new();
        let similar = find_similar(&engine, &target, &pool(), None);
        assert!(similar.iter().all(|p| p.id != "t"));
        assert!(!similar.is_empty());
    }

    #[test]
    fn test_lexical_ranking() {
        let target = Product::new("t", "Blue Denim Jacket", "Casual Wear");
        let engine = SimilarityEngine::new();
        let similar = find_similar(&engine, &target, &pool(), None);
        // The other denim jacket beats the tie
        assert_eq!(similar[0].id, "1");
        assert_eq!(similar.last().unwrap().id, "3");
        assert!(similar.iter().all(|p| p.similarity_score.is_some()));
    }

    #[test]
    fn test_semantic_path_when_provider_present() {
        let target = Product::new("t", "Blue Denim Jacket", "Casual Wear");
        let engine = SimilarityEngine::with_provider(Arc::new(HashEmbedder::new()));
        let similar = find_similar(&engine, &target, &pool(), None);
        assert!(!similar.is_empty());
        assert_eq!(similar[0].id, "1");
    }

    #[test]
    fn test_top_n_truncation() {
        let target = Product::new("t", "Blue Denim Jacket", "Casual Wear");
        let engine = SimilarityEngine::new();
        let similar = find_similar(&engine, &target, &pool(), Some(1));
        assert_eq!(similar.len(), 1);
    }

    #[test]
    fn test_pool_of_only_target_is_empty() {
        let target = Product::new("t", "Blue Denim Jacket", "Casual Wear");
        let engine = SimilarityEngine::new();
        let only_target = vec![target.clone()];
        assert!(find_similar(&engine, &target, &only_target, None).is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let target = Product::new("t", "Blue Denim Jacket", "Casual Wear");
        let engine = SimilarityEngine::new();
        let candidates = pool();
        let _ = find_similar(&engine, &target, &candidates, None);
        assert!(candidates.iter().all(|p| p.similarity_score.is_none()));
    }
}
