//! Text normalization for vectorization
//!
//! Flattens heterogeneous records into lowercase text blobs so products and
//! profiles live in the same bag-of-terms space. No stemming or
//! lemmatization; the vectorizer handles tokenization downstream.

use crate::product::Product;
use crate::profile::UserProfile;

/// How many times each interest token is repeated in the profile text.
const INTEREST_REPEAT: usize = 3;
/// How many times the fashion-style token is repeated.
const STYLE_REPEAT: usize = 2;

/// Flatten a product into one lowercase string: title, category, tags,
/// description, joined by single spaces. Empty fields are skipped.
#[must_use]
pub fn product_text(product: &Product) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3 + product.tags.len());
    if !product.title.is_empty() {
        parts.push(&product.title);
    }
    if !product.category.is_empty() {
        parts.push(&product.category);
    }
    for tag in &product.tags {
        if !tag.is_empty() {
            parts.push(tag);
        }
    }
    if !product.description.is_empty() {
        parts.push(&product.description);
    }
    parts.join(" ").to_lowercase()
}

/// Flatten a user profile into one lowercase string.
///
/// Interests and fashion style are repeated to weight them in the
/// bag-of-terms model: each interest appears three times, the style twice.
/// An empty profile yields an empty string, which vectorizes to a zero
/// vector downstream.
#[must_use]
pub fn profile_text(profile: &UserProfile) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for interest in &profile.interests {
        for _ in 0..INTEREST_REPEAT {
            parts.push(interest);
        }
    }
    if let Some(style) = profile.fashion_style.as_deref() {
        if !style.is_empty() {
            for _ in 0..STYLE_REPEAT {
                parts.push(style);
            }
        }
    }
    parts.join(" ").to_lowercase()
}
