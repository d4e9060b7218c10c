//! One-rep-max estimation and training max percentages

use serde::{Deserialize, Serialize};

/// Wendler programs off 90% of the true max
const TRAINING_MAX_RATIO: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneRmFormula {
    /// w * (1 + r/30)
    #[default]
    Epley,
    /// w * 36 / (37 - r), conservative at higher reps
    Brzycki,
    /// Simplified 5/3/1 estimate: w * 1.03 * r
    Wendler,
}

impl std::fmt::Display for OneRmFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Epley => write!(f, "epley"),
            Self::Brzycki => write!(f, "brzycki"),
            Self::Wendler => write!(f, "wendler"),
        }
    }
}

impl std::str::FromStr for OneRmFormula {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "wendler" => Ok(Self::Wendler),
            _ => Err(format!("Unknown 1RM formula: {}", s)),
        }
    }
}

/// Estimate a one-rep max from a set of `reps` at `weight`.
///
/// Returns `None` for a non-positive weight, zero reps, or a rep count the
/// formula cannot handle (Brzycki at 37+ reps).
pub fn estimate_one_rep_max(weight: f64, reps: u32, formula: OneRmFormula) -> Option<f64> {
    if !weight.is_finite() || weight <= 0.0 || reps < 1 {
        return None;
    }
    if reps == 1 {
        return Some(weight);
    }

    let r = reps as f64;
    match formula {
        OneRmFormula::Epley => Some(weight * (1.0 + r / 30.0)),
        OneRmFormula::Brzycki if reps < 37 => Some(weight * (36.0 / (37.0 - r))),
        OneRmFormula::Brzycki => None,
        OneRmFormula::Wendler => Some(weight * 1.03 * r),
    }
}

pub fn training_max(one_rep_max: f64) -> f64 {
    one_rep_max * TRAINING_MAX_RATIO
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentageRow {
    pub percent: u8,
    pub label: &'static str,
    pub weight: f64,
}

const PERCENTAGE_ZONES: [(u8, &str); 7] = [
    (95, "Heavy Singles"),
    (90, "Training Max"),
    (85, "Heavy Sets"),
    (80, "Strength Work"),
    (75, "Volume Work"),
    (70, "Speed Work"),
    (65, "Technique"),
];

/// Working weights for each training zone, heaviest first
pub fn percentage_table(one_rep_max: f64) -> Vec<PercentageRow> {
    PERCENTAGE_ZONES
        .iter()
        .map(|&(percent, label)| PercentageRow {
            percent,
            label,
            weight: one_rep_max * percent as f64 / 100.0,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthEstimate {
    pub formula: OneRmFormula,
    pub one_rep_max: f64,
    pub training_max: f64,
    pub percentages: Vec<PercentageRow>,
}

impl StrengthEstimate {
    pub fn compute(weight: f64, reps: u32, formula: OneRmFormula) -> Option<Self> {
        let one_rep_max = estimate_one_rep_max(weight, reps, formula)?;
        Some(Self {
            formula,
            one_rep_max,
            training_max: training_max(one_rep_max),
            percentages: percentage_table(one_rep_max),
        })
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
