//! Pluggable embedding capability
//!
//! Semantic scoring is an optional capability behind the
//! [`EmbeddingProvider`] trait. The engine is written against the trait, so
//! swapping a real model in needs no change to the rankers; the default
//! [`NullEmbedder`] keeps the system on the pure-lexical path.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Added to the cosine denominator to avoid division by zero.
const COSINE_EPSILON: f32 = 1e-10;

/// A source of dense text embeddings.
///
/// Returning `None` (provider unavailable, text unembeddable) is a supported
/// degradation path, not an error.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> Option<Vec<f32>>;
}

/// The default no-op provider: semantic capability absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEmbedder;

impl EmbeddingProvider for NullEmbedder {
    fn embed(&self, _text: &str) -> Option<Vec<f32>> {
        None
    }
}

/// Hash-based embedding provider.
///
/// Folds character trigrams and words into a fixed-dimension vector and
/// normalizes it. Crude next to a learned model, but deterministic, fast,
/// and dependency-free; useful as a stand-in semantic signal and in tests.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub const DEFAULT_DIM: usize = 128;

    #[must_use]
    pub fn new() -> Self {
        Self {
            dim: Self::DEFAULT_DIM,
        }
    }

    #[must_use]
    pub fn with_dim(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> Option<Vec<f32>> {
        if self.dim == 0 || text.trim().is_empty() {
            return None;
        }

        let normalized = text.to_lowercase();
        let mut vector = vec![0.0f32; self.dim];

        for trigram in trigrams(&normalized) {
            let pos = (hash_of(&trigram) as usize) % self.dim;
            vector[pos] += 1.0;
        }

        // Words contribute more than trigrams
        for word in normalized.split_whitespace() {
            let pos = (hash_of(word) as usize) % self.dim;
            vector[pos] += 2.0;
        }

        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude == 0.0 {
            return None;
        }
        for v in &mut vector {
            *v /= magnitude;
        }

        Some(vector)
    }
}

fn hash_of(s: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

/// Character trigrams over a space-padded string.
fn trigrams(s: &str) -> HashSet<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();
    if chars.len() < 3 {
        return HashSet::new();
    }
    chars.windows(3).map(|w| w.iter().collect()).collect()
}

/// Cosine similarity between dense embeddings, with an epsilon term in the
/// denominator so degenerate vectors score ~0 instead of dividing by zero.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    dot / (norm_a * norm_b + COSINE_EPSILON)
}
