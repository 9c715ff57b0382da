//! Call-scoped TF-IDF vector space
//!
//! Fits a bounded term-weighting vocabulary jointly over a query and its
//! candidate documents, producing L2-normalized sparse vectors for cosine
//! scoring. The vocabulary is rebuilt on every call by design; nothing here
//! is cached across requests.

use ahash::AHashMap;

use modista_core::{Error, Result};

/// Upper bound on the vocabulary size. Terms are kept by descending corpus
/// frequency, ties broken alphabetically for determinism.
pub const MAX_FEATURES: usize = 500;

/// Common English words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "i", "my", "we", "our", "they", "them", "their", "he", "she", "his", "her", "also",
    "all", "any", "each", "more", "most", "other", "some", "such", "only", "own", "same",
    "than", "too", "very", "just", "over", "under", "again", "then", "once", "here", "there",
    "when", "where", "why", "how", "what", "which", "who", "whom",
];

/// A sparse document vector: sorted (feature index, weight) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product over the sorted entry lists (merge walk).
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_val) = self.entries[i];
            let (b_idx, b_val) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_val * b_val;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    #[must_use]
    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, v)| v * v).sum::<f32>().sqrt()
    }

    /// Cosine similarity. Zero vectors (e.g. from empty text) score 0.
    #[must_use]
    pub fn cosine(&self, other: &SparseVector) -> f32 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        self.dot(other) / (norm_a * norm_b)
    }
}

/// TF-IDF vectorizer over unigrams and bigrams.
///
/// Mirrors the conventional setup: smooth IDF (`ln((1+n)/(1+df)) + 1`),
/// raw term counts for TF, L2 normalization of each document vector.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_features: MAX_FEATURES,
        }
    }

    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Fit a vocabulary over `texts` and transform each into a sparse
    /// TF-IDF vector, in input order.
    ///
    /// Errors with [`Error::Scoring`] if the batch is empty or no text
    /// yields a single term; individual empty texts are fine and come back
    /// as zero vectors.
    pub fn fit_transform(&self, texts: &[String]) -> Result<Vec<SparseVector>> {
        if texts.is_empty() {
            return Err(Error::Scoring("cannot fit on an empty batch".into()));
        }

        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| ngrams(t)).collect();

        // Corpus frequency and document frequency per term
        let mut corpus_freq: AHashMap<&str, u64> = AHashMap::new();
        let mut doc_freq: AHashMap<&str, u32> = AHashMap::new();
        for terms in &tokenized {
            let mut seen: AHashMap<&str, ()> = AHashMap::new();
            for term in terms {
                *corpus_freq.entry(term).or_insert(0) += 1;
                if seen.insert(term, ()).is_none() {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        if corpus_freq.is_empty() {
            return Err(Error::Scoring("no terms survived tokenization".into()));
        }

        // Bounded vocabulary: top terms by corpus frequency, then alphabetical
        let mut ranked: Vec<(&str, u64)> = corpus_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let vocabulary: AHashMap<&str, u32> = ranked
            .iter()
            .enumerate()
            .map(|(idx, (term, _))| (*term, idx as u32))
            .collect();

        let n = texts.len() as f32;
        let mut idf = vec![0.0f32; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f32;
            idf[idx as usize] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        let vectors = tokenized
            .iter()
            .map(|terms| {
                let mut tf: AHashMap<u32, f32> = AHashMap::new();
                for term in terms {
                    if let Some(&idx) = vocabulary.get(term.as_str()) {
                        *tf.entry(idx).or_insert(0.0) += 1.0;
                    }
                }

                let mut entries: Vec<(u32, f32)> = tf
                    .into_iter()
                    .map(|(idx, count)| (idx, count * idf[idx as usize]))
                    .collect();
                entries.sort_by_key(|(idx, _)| *idx);

                // L2 normalize so cosine reduces to a dot product
                let norm: f32 = entries.iter().map(|(_, v)| v * v).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for (_, v) in &mut entries {
                        *v /= norm;
                    }
                }

                SparseVector { entries }
            })
            .collect();

        Ok(vectors)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize text: lowercase, split on non-alphanumeric, drop single
/// characters and stop words.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Unigrams plus adjacent-pair bigrams over the filtered token stream.
fn ngrams(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut terms = Vec::with_capacity(tokens.len() * 2);
    for window in tokens.windows(2) {
        terms.push(format!("{} {}", window[0], window[1]));
    }
    terms.extend(tokens);
    terms
}
