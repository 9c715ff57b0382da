//! Size charts and range-fit scoring
//!
//! Fixed per-gender garment size charts in centimeters, and the linear-
//! penalty fit score used to match a measurement against a chart range.

use serde::{Deserialize, Serialize};

use modista_core::Gender;

/// Garment size labels, smallest to largest. The derived ordering backs the
/// explicit tie-break rule: when two sizes fit equally well, the larger one
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
    XXXL,
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
            SizeLabel::XXL => "XXL",
            SizeLabel::XXXL => "XXXL",
        };
        write!(f, "{label}")
    }
}

/// Inclusive measurement range in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRange {
    pub min: f64,
    pub max: f64,
}

impl FitRange {
    /// Fit score in 0-100: 100 inside the range (inclusive on both ends),
    /// otherwise penalized 2 points per centimeter outside the nearest
    /// bound, floored at 0.
    #[must_use]
    pub fn fit_score(&self, value: f64) -> f64 {
        if value >= self.min && value <= self.max {
            100.0
        } else if value < self.min {
            (100.0 - (self.min - value) * 2.0).max(0.0)
        } else {
            (100.0 - (value - self.max) * 2.0).max(0.0)
        }
    }
}

/// One row of a size chart.
#[derive(Debug, Clone, Copy)]
pub struct SizeBucket {
    pub label: SizeLabel,
    pub chest: FitRange,
    pub waist: FitRange,
    /// Present only on the female chart
    pub hips: Option<FitRange>,
}

const fn range(min: f64, max: f64) -> FitRange {
    FitRange { min, max }
}

const MALE_CHART: [SizeBucket; 7] = [
    SizeBucket { label: SizeLabel::XS, chest: range(81.0, 86.0), waist: range(66.0, 71.0), hips: None },
    SizeBucket { label: SizeLabel::S, chest: range(86.0, 91.0), waist: range(71.0, 76.0), hips: None },
    SizeBucket { label: SizeLabel::M, chest: range(91.0, 97.0), waist: range(76.0, 81.0), hips: None },
    SizeBucket { label: SizeLabel::L, chest: range(97.0, 102.0), waist: range(81.0, 86.0), hips: None },
    SizeBucket { label: SizeLabel::XL, chest: range(102.0, 109.0), waist: range(86.0, 94.0), hips: None },
    SizeBucket { label: SizeLabel::XXL, chest: range(109.0, 117.0), waist: range(94.0, 102.0), hips: None },
    SizeBucket { label: SizeLabel::XXXL, chest: range(117.0, 127.0), waist: range(102.0, 114.0), hips: None },
];

const FEMALE_CHART: [SizeBucket; 7] = [
    SizeBucket { label: SizeLabel::XS, chest: range(78.0, 82.0), waist: range(60.0, 64.0), hips: Some(range(86.0, 90.0)) },
    SizeBucket { label: SizeLabel::S, chest: range(82.0, 86.0), waist: range(64.0, 68.0), hips: Some(range(90.0, 94.0)) },
    SizeBucket { label: SizeLabel::M, chest: range(86.0, 92.0), waist: range(68.0, 74.0), hips: Some(range(94.0, 99.0)) },
    SizeBucket { label: SizeLabel::L, chest: range(92.0, 98.0), waist: range(74.0, 80.0), hips: Some(range(99.0, 104.0)) },
    SizeBucket { label: SizeLabel::XL, chest: range(98.0, 106.0), waist: range(80.0, 88.0), hips: Some(range(104.0, 112.0)) },
    SizeBucket { label: SizeLabel::XXL, chest: range(106.0, 116.0), waist: range(88.0, 98.0), hips: Some(range(112.0, 120.0)) },
    SizeBucket { label: SizeLabel::XXXL, chest: range(116.0, 128.0), waist: range(98.0, 110.0), hips: Some(range(120.0, 132.0)) },
];

/// The size chart for a gender. Anything other than `Male` uses the female
/// chart, matching the upstream sizing convention.
#[must_use]
pub fn chart_for(gender: Gender) -> &'static [SizeBucket] {
    match gender {
        Gender::Male => &MALE_CHART,
        _ => &FEMALE_CHART,
    }
}
