//! # modista Core
//!
//! Core library for the modista recommendation engine.
//!
//! This crate provides the shared data model and the leaf utilities the
//! scoring engines are built on:
//!
//! - [`Product`] - A unified product record with engine-attached score fields
//! - [`UserProfile`] - Per-request user preferences
//! - [`FilterSet`] / [`PriceRange`] - Post-scoring result filters
//! - [`text`] - Text normalization for vectorization
//!
//! ## Example
//!
//! ```rust
//! use modista_core::{Product, UserProfile, Gender, text};
//!
//! let product = Product::new("p1", "Classic Cotton T-Shirt", "Casual Wear")
//!     .with_tags(vec!["cotton".into(), "casual".into()])
//!     .with_price(24.99);
//!
//! let profile = UserProfile {
//!     interests: vec!["casual".into(), "streetwear".into()],
//!     fashion_style: Some("minimalist".into()),
//!     gender: Gender::Male,
//! };
//!
//! let doc = text::product_text(&product);
//! let query = text::profile_text(&profile);
//! assert!(doc.contains("cotton"));
//! assert!(query.contains("minimalist"));
//! ```

pub mod error;
pub mod filter;
pub mod product;
pub mod profile;
pub mod text;

pub use error::{Error, Result};
pub use filter::{FilterSet, PriceRange};
pub use product::{Gender, Product};
pub use profile::UserProfile;
