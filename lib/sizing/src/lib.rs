//! # modista Sizing
//!
//! Rule-based garment size classification from body measurements.
//!
//! Independent of the recommendation engines: takes raw measurements
//! directly, scores them against fixed per-gender size charts with a
//! linear-penalty fit function, and derives a body-shape label plus short
//! fit advice.
//!
//! ## Example
//!
//! ```rust
//! use modista_core::Gender;
//! use modista_sizing::{classify, Measurements, SizeLabel};
//!
//! let result = classify(&Measurements {
//!     gender: Gender::Male,
//!     height: 175.0,
//!     weight: 70.0,
//!     chest: 97.0,
//!     waist: 81.0,
//!     hips: None,
//!     shoulder: None,
//!     age: None,
//! })
//! .unwrap();
//!
//! assert_eq!(result.recommended_size, SizeLabel::L);
//! assert_eq!(result.confidence, 100);
//! ```

pub mod chart;
pub mod classify;

pub use chart::{chart_for, FitRange, SizeBucket, SizeLabel};
pub use classify::{classify, BodyType, Measurements, SizeRecommendation};
