use serde::{Deserialize, Serialize};

/// Gender tag carried by products, profiles, and measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unisex,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Unisex => write!(f, "unisex"),
        }
    }
}

/// A product record unified across upstream suppliers.
///
/// The `*_score` fields are view fields attached by the engines to copies of
/// the input. They are recomputed per request and never persisted; a product
/// fresh from a supplier carries `None` for all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: f64,
    /// Star rating in 0.0-5.0
    #[serde(default)]
    pub rating: f64,
    /// Provenance tag of the upstream supplier
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub gender: Gender,

    /// Hybrid relevance score attached by the recommender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f32>,
    /// Embedding-based component of the relevance score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_score: Option<f32>,
    /// Lexical (TF-IDF cosine) component of the relevance score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfidf_score: Option<f32>,
    /// Score attached by the similar-item finder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f32>,
    /// Score attached by the trending ranker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<f32>,
}

impl Product {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            tags: Vec::new(),
            price: 0.0,
            rating: 0.0,
            source: String::new(),
            gender: Gender::Unisex,
            relevance_score: None,
            semantic_score: None,
            tfidf_score: None,
            similarity_score: None,
            trending_score: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let p = Product::new("p1", "Denim Jacket", "Casual Wear")
            .with_price(52.99)
            .with_rating(4.6)
            .with_source("amazon");
        assert_eq!(p.id, "p1");
        assert_eq!(p.price, 52.99);
        assert!(p.relevance_score.is_none());
    }

    #[test]
    fn test_serde_camel_case() {
        let mut p = Product::new("p1", "Denim Jacket", "Casual Wear");
        p.relevance_score = Some(0.42);

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["relevanceScore"], 0.42);
        // Unattached score fields stay off the wire
        assert!(json.get("similarityScore").is_none());
    }

    #[test]
    fn test_deserialize_minimal() {
        let p: Product = serde_json::from_str(
            r#"{"id": "x", "title": "Silk Tie", "category": "Formal Wear"}"#,
        )
        .unwrap();
        assert_eq!(p.gender, Gender::Unisex);
        assert!(p.tags.is_empty());
    }
}
