use serde::{Deserialize, Serialize};

use crate::product::Gender;

/// User preferences for a single recommendation request.
///
/// Constructed per request and discarded afterwards; nothing about the user
/// is retained between calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Free-text interest tokens, e.g. "streetwear", "vintage denim"
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free-text style descriptor, e.g. "minimalist"
    #[serde(default)]
    pub fashion_style: Option<String>,
    #[serde(default)]
    pub gender: Gender,
}

impl UserProfile {
    /// True when the profile carries no preference signal at all.
    /// An empty profile is valid input; it vectorizes to a zero vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interests.is_empty() && self.fashion_style.as_deref().map_or(true, str::is_empty)
    }
}
