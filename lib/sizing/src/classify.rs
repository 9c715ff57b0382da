//! Body-measurement to garment-size classification
//!
//! Validates measurements, derives BMI and a body-shape label, scores every
//! chart size with the range-fit function, and assembles short fit-advice
//! strings.

use serde::{Deserialize, Serialize};

use modista_core::{Error, Gender, Result};

use crate::chart::{chart_for, SizeLabel};

/// Raw body measurements for a size request. Height in cm, weight in kg,
/// girths in cm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurements {
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub chest: f64,
    pub waist: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Body-shape label derived from measurement ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "Athletic/V-Shape")]
    AthleticVShape,
    #[serde(rename = "Rectangle/Straight")]
    RectangleStraight,
    #[serde(rename = "Round/Apple")]
    RoundApple,
    #[serde(rename = "Trapezoid")]
    Trapezoid,
    #[serde(rename = "Hourglass")]
    Hourglass,
    #[serde(rename = "Pear/Triangle")]
    PearTriangle,
    #[serde(rename = "Inverted Triangle")]
    InvertedTriangle,
    #[serde(rename = "Rectangle")]
    Rectangle,
    #[serde(rename = "Apple/Round")]
    AppleRound,
}

impl BodyType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::AthleticVShape => "Athletic/V-Shape",
            BodyType::RectangleStraight => "Rectangle/Straight",
            BodyType::RoundApple => "Round/Apple",
            BodyType::Trapezoid => "Trapezoid",
            BodyType::Hourglass => "Hourglass",
            BodyType::PearTriangle => "Pear/Triangle",
            BodyType::InvertedTriangle => "Inverted Triangle",
            BodyType::Rectangle => "Rectangle",
            BodyType::AppleRound => "Apple/Round",
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full result of a size classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeRecommendation {
    pub recommended_size: SizeLabel,
    /// The winning size's integer fit score (0-100)
    pub confidence: u32,
    /// Up to two runner-up sizes scoring at least 80% of the winner
    pub alternative_sizes: Vec<SizeLabel>,
    pub body_type: BodyType,
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// Up to three short fit-advice strings
    pub recommendations: Vec<String>,
}

/// Classify body measurements into a garment size.
///
/// Fails with [`Error::Validation`] when any mandatory measurement is
/// missing or non-positive; no partial result is produced.
pub fn classify(m: &Measurements) -> Result<SizeRecommendation> {
    validate(m)?;

    let height_m = m.height / 100.0;
    let bmi = m.weight / (height_m * height_m);

    let body_type = match m.gender {
        Gender::Male => male_body_type(m.chest, m.waist),
        _ => female_body_type(m.chest, m.waist, m.hips),
    };

    let (recommended_size, confidence, alternative_sizes) = best_fit(m);
    let recommendations = fit_advice(recommended_size, body_type, m.gender, bmi);

    Ok(SizeRecommendation {
        recommended_size,
        confidence,
        alternative_sizes,
        body_type,
        bmi: (bmi * 10.0).round() / 10.0,
        recommendations,
    })
}

fn validate(m: &Measurements) -> Result<()> {
    for (name, value) in [
        ("height", m.height),
        ("weight", m.weight),
        ("chest", m.chest),
        ("waist", m.waist),
    ] {
        if value <= 0.0 || !value.is_finite() {
            return Err(Error::Validation(format!(
                "measurement '{name}' must be positive"
            )));
        }
    }
    Ok(())
}

/// Male shape from the chest/waist ratio. First matching rule wins.
fn male_body_type(chest: f64, waist: f64) -> BodyType {
    let ratio = if waist > 0.0 { chest / waist } else { 1.0 };
    if ratio > 1.3 {
        BodyType::AthleticVShape
    } else if ratio > 1.15 {
        BodyType::RectangleStraight
    } else if ratio < 1.0 {
        BodyType::RoundApple
    } else {
        BodyType::Trapezoid
    }
}

/// Female shape from chest/waist/hip differences. Branch order matters: the
/// first matching rule wins. Missing hips fall back to the chest girth.
fn female_body_type(chest: f64, waist: f64, hips: Option<f64>) -> BodyType {
    let hips = hips.filter(|h| *h > 0.0).unwrap_or(chest);

    let chest_waist_diff = (chest - waist).abs();
    let hip_waist_diff = (hips - waist).abs();
    let chest_hip_diff = (chest - hips).abs();

    if chest_hip_diff <= 5.0 && waist < chest * 0.75 {
        BodyType::Hourglass
    } else if hips > chest && hip_waist_diff > chest_waist_diff {
        BodyType::PearTriangle
    } else if chest > hips && chest_waist_diff > hip_waist_diff {
        BodyType::InvertedTriangle
    } else if chest_hip_diff <= 5.0 {
        BodyType::Rectangle
    } else {
        BodyType::AppleRound
    }
}

/// Score every chart size and pick the winner plus alternatives.
///
/// The base weighting is 0.6 chest / 0.4 waist. Only female requests with a
/// hip measurement switch to the three-factor 0.4/0.3/0.3 weighting; other
/// genders keep the two-factor weighting even on the hip-bearing female
/// chart. Equal totals are broken toward the larger size - shared range
/// boundaries make adjacent sizes score identically, and the tie-break must
/// be deterministic rather than map-iteration luck.
fn best_fit(m: &Measurements) -> (SizeLabel, u32, Vec<SizeLabel>) {
    let hips = if m.gender == Gender::Female {
        m.hips.filter(|h| *h > 0.0)
    } else {
        None
    };

    let mut scores: Vec<(SizeLabel, f64)> = chart_for(m.gender)
        .iter()
        .map(|bucket| {
            let chest_score = bucket.chest.fit_score(m.chest);
            let waist_score = bucket.waist.fit_score(m.waist);
            let total = match (bucket.hips, hips) {
                (Some(hip_range), Some(hips)) => {
                    0.4 * chest_score + 0.3 * waist_score + 0.3 * hip_range.fit_score(hips)
                }
                _ => 0.6 * chest_score + 0.4 * waist_score,
            };
            (bucket.label, total)
        })
        .collect();

    // Highest score first; ties prefer the larger size
    scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.0.cmp(&a.0))
    });

    let (winner, best_score) = scores[0];
    let confidence = best_score.max(0.0) as u32;

    let alternatives: Vec<SizeLabel> = scores[1..]
        .iter()
        .take(2)
        .filter(|(_, score)| *score >= f64::from(confidence) * 0.8)
        .map(|(label, _)| *label)
        .collect();

    (winner, confidence, alternatives)
}

/// Up to three advisory strings: BMI note, body-shape note, size-extreme
/// note, in that order.
fn fit_advice(size: SizeLabel, body_type: BodyType, gender: Gender, bmi: f64) -> Vec<String> {
    let mut advice: Vec<String> = Vec::new();

    if bmi < 18.5 {
        advice.push("Consider slim-fit styles for a more tailored look".into());
    } else if bmi > 25.0 {
        advice.push("Regular fit styles provide comfortable wear".into());
    }

    match gender {
        Gender::Male => match body_type {
            BodyType::AthleticVShape => {
                advice.push("Fitted shirts will complement your V-shape".into());
            }
            BodyType::RoundApple => {
                advice.push("Vertical patterns can create a lengthening effect".into());
            }
            _ => {}
        },
        _ => match body_type {
            BodyType::Hourglass => {
                advice.push("Fitted or wrap styles accentuate your shape".into());
            }
            BodyType::PearTriangle => {
                advice.push("A-line silhouettes balance your proportions".into());
            }
            BodyType::InvertedTriangle => {
                advice.push("V-necks draw attention upward".into());
            }
            _ => {}
        },
    }

    match size {
        SizeLabel::XS | SizeLabel::S => {
            advice.push("Check if petite sizes are available".into());
        }
        SizeLabel::XXL | SizeLabel::XXXL => {
            advice.push("Look for extended size ranges for best fit".into());
        }
        _ => {}
    }

    advice.truncate(3);
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male(height: f64, weight: f64, chest: f64, waist: f64) -> Measurements {
        Measurements {
            gender: Gender::Male,
            height,
            weight,
            chest,
            waist,
            hips: None,
            shoulder: None,
            age: None,
        }
    }

    fn female(height: f64, weight: f64, chest: f64, waist: f64, hips: Option<f64>) -> Measurements {
        Measurements {
            gender: Gender::Female,
            height,
            weight,
            chest,
            waist,
            hips,
            shoulder: None,
            age: None,
        }
    }

    #[test]
    fn test_missing_chest_rejected() {
        let err = classify(&male(175.0, 70.0, 0.0, 81.0)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_male_boundary_case() {
        // chest 97 sits on the shared M/L boundary, waist 81 on M/L too;
        // both score 100 and the tie-break prefers the larger size
        let result = classify(&male(175.0, 70.0, 97.0, 81.0)).unwrap();
        assert_eq!(result.body_type, BodyType::RectangleStraight); // ratio ~1.198
        assert_eq!(result.recommended_size, SizeLabel::L);
        assert_eq!(result.confidence, 100);
        assert_eq!(result.alternative_sizes, vec![SizeLabel::M, SizeLabel::XL]);
    }

    #[test]
    fn test_male_body_types() {
        assert_eq!(male_body_type(105.0, 75.0), BodyType::AthleticVShape);
        assert_eq!(male_body_type(97.0, 81.0), BodyType::RectangleStraight);
        assert_eq!(male_body_type(90.0, 95.0), BodyType::RoundApple);
        assert_eq!(male_body_type(90.0, 85.0), BodyType::Trapezoid);
    }

    #[test]
    fn test_female_pear_case() {
        // chest-hip diff 4 but waist 66 is not strictly below 0.75*88=66,
        // so Hourglass does not match; hips>chest with the larger
        // hip-waist gap gives Pear/Triangle
        let result = classify(&female(165.0, 60.0, 88.0, 66.0, Some(92.0))).unwrap();
        assert_eq!(result.body_type, BodyType::PearTriangle);
        assert_eq!(result.recommended_size, SizeLabel::S);
        assert_eq!(result.confidence, 98);
        assert_eq!(result.alternative_sizes, vec![SizeLabel::M, SizeLabel::XS]);
    }

    #[test]
    fn test_female_hourglass() {
        assert_eq!(
            female_body_type(92.0, 65.0, Some(94.0)),
            BodyType::Hourglass
        );
    }

    #[test]
    fn test_female_missing_hips_defaults_to_chest() {
        // hips = chest makes chest_hip_diff 0; waist well below 0.75*chest
        assert_eq!(female_body_type(95.0, 65.0, None), BodyType::Hourglass);
        // and a flatter figure lands on Rectangle
        assert_eq!(female_body_type(85.0, 78.0, None), BodyType::Rectangle);
    }

    #[test]
    fn test_female_without_hips_uses_two_factor_weighting() {
        let with_hips = classify(&female(165.0, 60.0, 88.0, 66.0, Some(92.0))).unwrap();
        let without = classify(&female(165.0, 60.0, 88.0, 66.0, None)).unwrap();
        // Both classify, potentially with different confidence
        assert!(without.confidence > 0);
        assert!(with_hips.confidence > 0);
    }

    #[test]
    fn test_hip_weighting_is_female_only() {
        // Unisex requests use the female chart but keep the two-factor
        // weighting even when hips are supplied
        let with_hips = classify(&Measurements {
            gender: Gender::Unisex,
            height: 165.0,
            weight: 60.0,
            chest: 88.0,
            waist: 66.0,
            hips: Some(92.0),
            shoulder: None,
            age: None,
        })
        .unwrap();
        let without = classify(&Measurements {
            gender: Gender::Unisex,
            height: 165.0,
            weight: 60.0,
            chest: 88.0,
            waist: 66.0,
            hips: None,
            shoulder: None,
            age: None,
        })
        .unwrap();
        assert_eq!(with_hips.recommended_size, without.recommended_size);
        assert_eq!(with_hips.confidence, without.confidence);

        // The same measurements as a female request do weight hips: the
        // in-range hips pull the recommendation down to S, while the
        // two-factor weighting favors the M chest range
        let female = classify(&female(165.0, 60.0, 88.0, 66.0, Some(92.0))).unwrap();
        assert_eq!(female.recommended_size, SizeLabel::S);
        assert_eq!(with_hips.recommended_size, SizeLabel::M);
    }

    #[test]
    fn test_bmi_rounded_one_decimal() {
        let result = classify(&male(175.0, 70.0, 97.0, 81.0)).unwrap();
        // 70 / 1.75^2 = 22.857... -> 22.9
        assert_eq!(result.bmi, 22.9);
    }

    #[test]
    fn test_advice_order_and_cap() {
        // Underweight athletic male in XS: BMI note, shape note, size note
        let result = classify(&male(185.0, 55.0, 84.0, 62.0)).unwrap();
        assert!(result.recommendations.len() <= 3);
        assert!(result.recommendations[0].contains("slim-fit"));
    }

    #[test]
    fn test_body_type_serializes_as_label() {
        let json = serde_json::to_string(&BodyType::PearTriangle).unwrap();
        assert_eq!(json, "\"Pear/Triangle\"");
    }
}
