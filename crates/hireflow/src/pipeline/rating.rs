//! Conversion of heterogeneous form input onto the canonical 0-5 scale.
//!
//! Form collaborators submit dropdown labels ("Excellent", "Strong Fit") and
//! raw numbers interchangeably. Everything funnels through [`normalize`]
//! before any averaging; a result of 0.0 means "no signal" and is excluded
//! from means rather than treated as a zero score.

use serde::{Deserialize, Serialize};

pub const MAX_RATING: f64 = 5.0;

/// Wire representation of a single rating input: a number or a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingValue {
    Score(f64),
    Label(String),
}

const SCORE_FIVE: &[&str] = &[
    "excellent",
    "strong",
    "high",
    "expert",
    "strong fit",
    "within budget",
    "proceed to offer",
    "strong hire",
    "pass",
    "eligible",
];
const SCORE_FOUR: &[&str] = &["good", "moderate", "medium", "intermediate", "hire"];
const SCORE_THREE: &[&str] = &["average", "acceptable", "beginner", "on-hold", "partial"];
const SCORE_TWO: &[&str] = &[
    "poor",
    "low",
    "borderline",
    "slightly above budget",
    "not required",
];
const SCORE_ONE: &[&str] = &["fail", "no hire", "reject", "not eligible", "not affordable"];

/// Map a textual selection to its bucket score; 0.0 for unmatched or empty.
pub fn normalize_label(label: &str) -> f64 {
    let needle = label.trim().to_lowercase();
    if needle.is_empty() {
        return 0.0;
    }
    if SCORE_FIVE.contains(&needle.as_str()) {
        5.0
    } else if SCORE_FOUR.contains(&needle.as_str()) {
        4.0
    } else if SCORE_THREE.contains(&needle.as_str()) {
        3.0
    } else if SCORE_TWO.contains(&needle.as_str()) {
        2.0
    } else if SCORE_ONE.contains(&needle.as_str()) {
        1.0
    } else {
        0.0
    }
}

/// Normalize one input onto [0, 5]. Numbers pass through, clamped; labels go
/// through the bucket table.
pub fn normalize(value: &RatingValue) -> f64 {
    match value {
        RatingValue::Score(score) => score.clamp(0.0, MAX_RATING),
        RatingValue::Label(label) => normalize_label(label),
    }
}

/// Mean of the inputs that carry signal, rounded to two decimals. No-signal
/// entries (normalized 0.0) are dropped; an all-no-signal set yields 0.0.
pub fn aggregate_overall(values: &[RatingValue]) -> f64 {
    let scores: Vec<f64> = values.iter().map(normalize).filter(|s| *s > 0.0).collect();
    if scores.is_empty() {
        return 0.0;
    }
    round2(scores.iter().sum::<f64>() / scores.len() as f64)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
