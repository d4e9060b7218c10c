//! Weight class cut analysis
//!
//! Answers "how hard is it to make this weight class?" from two body weights.
//! Everything here is pure; the caller hides the result panel when
//! [`analyze`] returns `None`.
//!
//! Which value each classifier reads:
//! - [`SeverityTier`] classifies the percentage rounded to two decimals, so
//!   float noise on an exact 3% cut stays Easy while 3.01% is Moderate. The
//!   reported `delta_percent` is rounded further, to one decimal.
//! - [`WeighInDifficulty`] classifies the kilos rounded to one decimal, the
//!   same number [`kilos_to_lose`] reports.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Severity thresholds (percent of bodyweight)
/// ---------------------------------------------------------------------------

const EASY_MAX_PERCENT: f64 = 3.0;
const MODERATE_MAX_PERCENT: f64 = 5.0;
const HARD_MAX_PERCENT: f64 = 7.0;

/// Weigh-in thresholds in absolute kilos
const WEIGH_IN_EASY_MAX_KG: f64 = 2.0;
const WEIGH_IN_MODERATE_MAX_KG: f64 = 5.0;

/// ---------------------------------------------------------------------------
/// Severity Tier
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
  /// <= 3% of bodyweight
  Easy,
  /// 3% - 5%
  Moderate,
  /// 5% - 7%
  Hard,
  /// > 7%
  TooMuch,
}

impl SeverityTier {
  /// Upper edge is closed: exactly 3.0% is still Easy
  pub fn from_percent(percent: f64) -> Self {
    match percent {
      p if p <= EASY_MAX_PERCENT => SeverityTier::Easy,
      p if p <= MODERATE_MAX_PERCENT => SeverityTier::Moderate,
      p if p <= HARD_MAX_PERCENT => SeverityTier::Hard,
      _ => SeverityTier::TooMuch,
    }
  }

  /// Message shown under the cut analysis
  pub fn headline(&self) -> &'static str {
    match self {
      SeverityTier::Easy => "Easy cut - should be no problem",
      SeverityTier::Moderate => "Moderate cut - doable with planning",
      SeverityTier::Hard => "Hard cut - will impact performance",
      SeverityTier::TooMuch => "Too much - consider moving up a class",
    }
  }
}

impl std::fmt::Display for SeverityTier {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Easy => write!(f, "easy"),
      Self::Moderate => write!(f, "moderate"),
      Self::Hard => write!(f, "hard"),
      Self::TooMuch => write!(f, "too_much"),
    }
  }
}

impl std::str::FromStr for SeverityTier {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "easy" => Ok(Self::Easy),
      "moderate" => Ok(Self::Moderate),
      "hard" => Ok(Self::Hard),
      "too_much" => Ok(Self::TooMuch),
      _ => Err(format!("Unknown severity tier: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Cut Analysis
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCutInput {
  pub current_weight: f64,
  pub target_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCutResult {
  /// Kilos to lose (current - target)
  pub delta_absolute: f64,
  /// Share of current bodyweight, rounded to one decimal
  pub delta_percent: f64,
  pub severity: SeverityTier,
}

impl WeightCutInput {
  pub fn analyze(&self) -> Option<WeightCutResult> {
    analyze(self.current_weight, self.target_weight)
  }
}

/// Analyze a planned cut from `current_weight` down to `target_weight`.
///
/// Returns `None` when there is nothing to cut: either weight is not a finite
/// positive number, or the target is not below the current weight.
pub fn analyze(current_weight: f64, target_weight: f64) -> Option<WeightCutResult> {
  if !is_positive_weight(current_weight) || !is_positive_weight(target_weight) {
    return None;
  }
  if current_weight <= target_weight {
    return None;
  }

  let delta_absolute = current_weight - target_weight;
  let raw_percent = delta_absolute * 100.0 / current_weight;

  tracing::trace!(current_weight, target_weight, raw_percent, "weight cut analyzed");

  Some(WeightCutResult {
    delta_absolute,
    delta_percent: round_one_decimal(raw_percent),
    severity: SeverityTier::from_percent(round_two_decimals(raw_percent)),
  })
}

/// ---------------------------------------------------------------------------
/// Weigh-in Difficulty (absolute kilos, used by the meet weigh-in planner)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeighInDifficulty {
  Easy,
  Moderate,
  Difficult,
}

impl WeighInDifficulty {
  pub fn from_kilos(kilos_to_lose: f64) -> Self {
    if kilos_to_lose <= WEIGH_IN_EASY_MAX_KG {
      WeighInDifficulty::Easy
    } else if kilos_to_lose <= WEIGH_IN_MODERATE_MAX_KG {
      WeighInDifficulty::Moderate
    } else {
      WeighInDifficulty::Difficult
    }
  }

  pub fn advice(&self) -> &'static str {
    match self {
      WeighInDifficulty::Easy => "Easy - minimal manipulation needed",
      WeighInDifficulty::Moderate => "Moderate - water cut recommended",
      WeighInDifficulty::Difficult => "Difficult - consider slow cut or weight class up",
    }
  }
}

/// Kilos left to lose before weigh-in, floored at zero and rounded to 0.1 kg
pub fn kilos_to_lose(current_weight: f64, target_weight: f64) -> f64 {
  if !current_weight.is_finite() || !target_weight.is_finite() {
    return 0.0;
  }
  round_one_decimal((current_weight - target_weight).max(0.0))
}

pub fn weigh_in_difficulty(current_weight: f64, target_weight: f64) -> WeighInDifficulty {
  WeighInDifficulty::from_kilos(kilos_to_lose(current_weight, target_weight))
}

fn is_positive_weight(w: f64) -> bool {
  w.is_finite() && w > 0.0
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

fn round_two_decimals(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn test_equal_or_inverted_weights_yield_nothing() {
    assert_eq!(analyze(83.0, 83.0), None);
    assert_eq!(analyze(80.0, 83.0), None);
  }

  #[test]
  fn test_invalid_weights_yield_nothing() {
    assert_eq!(analyze(f64::NAN, 83.0), None);
    assert_eq!(analyze(85.0, f64::INFINITY), None);
    assert_eq!(analyze(85.0, 0.0), None);
    assert_eq!(analyze(-85.0, -90.0), None);
  }

  #[test]
  fn test_small_cut_is_easy() {
    let result = analyze(85.0, 83.0).expect("should have a result");
    assert_eq!(result.delta_absolute, 2.0);
    assert_eq!(result.delta_percent, 2.4);
    assert_eq!(result.severity, SeverityTier::Easy);
  }

  #[test]
  fn test_large_cut_is_too_much() {
    let result = analyze(85.0, 78.0).expect("should have a result");
    assert_eq!(result.delta_absolute, 7.0);
    assert_eq!(result.delta_percent, 8.2);
    assert_eq!(result.severity, SeverityTier::TooMuch);
  }

  #[test]
  fn test_tier_boundaries_closed_on_upper_edge() {
    assert_eq!(analyze(100.0, 97.0).unwrap().severity, SeverityTier::Easy);
    assert_eq!(analyze(100.0, 96.99).unwrap().severity, SeverityTier::Moderate);
    assert_eq!(analyze(100.0, 95.0).unwrap().severity, SeverityTier::Moderate);
    assert_eq!(analyze(100.0, 94.0).unwrap().severity, SeverityTier::Hard);
    assert_eq!(analyze(100.0, 93.0).unwrap().severity, SeverityTier::Hard);
    assert_eq!(analyze(100.0, 92.5).unwrap().severity, SeverityTier::TooMuch);
  }

  #[test]
  fn test_exact_thresholds_survive_float_noise() {
    // current - target is inexact for these, raw percent lands a hair above
    assert_eq!(analyze(90.0, 87.3).unwrap().severity, SeverityTier::Easy);
    assert_eq!(analyze(80.0, 77.6).unwrap().severity, SeverityTier::Easy);
    assert_eq!(analyze(130.0, 126.1).unwrap().severity, SeverityTier::Easy);
    assert_eq!(analyze(70.0, 65.1).unwrap().severity, SeverityTier::Hard);
    assert_eq!(analyze(110.0, 102.3).unwrap().severity, SeverityTier::Hard);

    let result = analyze(90.0, 87.3).unwrap();
    assert_eq!(result.delta_percent, 3.0);
  }

  #[test]
  fn test_input_struct_delegates() {
    let input = WeightCutInput { current_weight: 85.0, target_weight: 83.0 };
    assert_eq!(input.analyze(), analyze(85.0, 83.0));
  }

  #[test]
  fn test_severity_string_roundtrip() {
    for tier in [
      SeverityTier::Easy,
      SeverityTier::Moderate,
      SeverityTier::Hard,
      SeverityTier::TooMuch,
    ] {
      assert_eq!(tier.to_string().parse::<SeverityTier>(), Ok(tier));
    }
    assert!("brutal".parse::<SeverityTier>().is_err());
  }

  #[test]
  fn test_headline_mentions_class_change_for_too_much() {
    assert!(SeverityTier::TooMuch.headline().contains("moving up a class"));
  }

  #[test]
  fn test_weigh_in_difficulty() {
    // 84.2 -> 82.5 is 1.7kg
    assert_eq!(kilos_to_lose(84.2, 82.5), 1.7);
    assert_eq!(weigh_in_difficulty(84.2, 82.5), WeighInDifficulty::Easy);
    assert_eq!(weigh_in_difficulty(87.5, 82.5), WeighInDifficulty::Moderate);
    assert_eq!(weigh_in_difficulty(90.0, 82.5), WeighInDifficulty::Difficult);
  }

  #[test]
  fn test_weigh_in_already_under_target() {
    assert_eq!(kilos_to_lose(80.0, 82.5), 0.0);
    assert_eq!(weigh_in_difficulty(80.0, 82.5), WeighInDifficulty::Easy);
  }

  proptest! {
    #[test]
    fn prop_percent_matches_formula(current in 40.0f64..200.0, cut in 0.01f64..30.0) {
      let target = current - cut;
      let result = analyze(current, target).expect("target below current");
      let expected = 100.0 * (current - target) / current;
      prop_assert!((result.delta_percent - expected).abs() <= 0.05 + 1e-9);
      prop_assert!(result.delta_absolute > 0.0);
    }

    #[test]
    fn prop_exact_threshold_cuts_stay_in_lower_tier(
      current in 40.0f64..200.0,
      threshold in prop::sample::select(vec![
        (3.0, SeverityTier::Easy),
        (5.0, SeverityTier::Moderate),
        (7.0, SeverityTier::Hard),
      ]),
    ) {
      let (percent, expected) = threshold;
      let target = current * (1.0 - percent / 100.0);
      let result = analyze(current, target).expect("target below current");
      prop_assert_eq!(result.severity, expected);
      prop_assert_eq!(result.delta_percent, percent);
    }

    #[test]
    fn prop_no_result_when_target_not_below(current in 1.0f64..200.0, extra in 0.0f64..50.0) {
      prop_assert_eq!(analyze(current, current + extra), None);
    }

    #[test]
    fn prop_analysis_is_idempotent(current in 1.0f64..200.0, target in 1.0f64..200.0) {
      prop_assert_eq!(analyze(current, target), analyze(current, target));
    }
  }
}
