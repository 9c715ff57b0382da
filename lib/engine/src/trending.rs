//! Trending ranker
//!
//! Blends recent interaction counts with product ratings. Interaction
//! history itself lives with the caller; this module only consumes a slice
//! of it per request.

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use modista_core::Product;

/// Default number of trending products returned.
pub const DEFAULT_TRENDING_N: usize = 10;

/// Weight of the interaction count in the trending score.
const INTERACTION_WEIGHT: f32 = 0.7;
/// Weight of the product rating in the trending score.
const RATING_WEIGHT: f32 = 0.3;

/// A single user-product interaction event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub user_id: String,
    pub product_id: String,
    /// Free-text action tag: "view", "click", "like", ...
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Rank products by `0.7 * interaction_count + 0.3 * rating`.
///
/// Returns scored copies with `trending_score` attached, sorted descending,
/// truncated to `top_n` (default 10). Products with no interactions still
/// rank by their rating component.
#[must_use]
pub fn trending(
    products: &[Product],
    interactions: &[Interaction],
    top_n: Option<usize>,
) -> Vec<Product> {
    let top_n = top_n.unwrap_or(DEFAULT_TRENDING_N);

    let mut counts: AHashMap<&str, u32> = AHashMap::new();
    for interaction in interactions {
        *counts.entry(interaction.product_id.as_str()).or_insert(0) += 1;
    }

    let mut scored: Vec<Product> = products
        .iter()
        .map(|p| {
            let count = counts.get(p.id.as_str()).copied().unwrap_or(0) as f32;
            let mut copy = p.clone();
            copy.trending_score =
                Some(INTERACTION_WEIGHT * count + RATING_WEIGHT * p.rating as f32);
            copy
        })
        .collect();

    scored.sort_by(|a, b| {
        b.trending_score
            .partial_cmp(&a.trending_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);
    scored
}

/// Record a batch of interactions for later model work.
///
/// Today this only logs the batch; a future collaborator can persist it for
/// collaborative filtering.
pub fn log_interactions(interactions: &[Interaction]) {
    if interactions.is_empty() {
        return;
    }
    info!(count = interactions.len(), "logged user interactions");
}
