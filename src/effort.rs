//! RPE / RIR conversion
//!
//! RPE = 10 - RIR. Values outside 0..=10 pass straight through; a caller
//! typing RIR 15 gets RPE -5 back.

use serde::{Deserialize, Serialize};

const RPE_MAX: f64 = 10.0;

pub fn rir_to_rpe(rir: f64) -> f64 {
  RPE_MAX - rir
}

pub fn rpe_to_rir(rpe: f64) -> f64 {
  RPE_MAX - rpe
}

/// An effort rating carried as reps in reserve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortRating {
  pub rir: f64,
}

impl EffortRating {
  pub fn from_rir(rir: f64) -> Self {
    Self { rir }
  }

  pub fn from_rpe(rpe: f64) -> Self {
    Self { rir: rpe_to_rir(rpe) }
  }

  pub fn rpe(&self) -> f64 {
    rir_to_rpe(self.rir)
  }

  /// True when the rating sits on the 0..=10 scale
  pub fn is_on_scale(&self) -> bool {
    (0.0..=RPE_MAX).contains(&self.rir)
  }
}

/// ---------------------------------------------------------------------------
/// RPE scale descriptors
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RpeDescriptor {
  pub value: f64,
  pub label: &'static str,
  pub description: &'static str,
  pub reps_in_reserve: &'static str,
}

pub static RPE_SCALE: [RpeDescriptor; 10] = [
  RpeDescriptor { value: 10.0, label: "Max Effort", description: "No other rep possible", reps_in_reserve: "0 RIR" },
  RpeDescriptor { value: 9.5, label: "Near Max", description: "Maybe 1 more rep", reps_in_reserve: "0-1 RIR" },
  RpeDescriptor { value: 9.0, label: "Very Hard", description: "1 more rep for sure", reps_in_reserve: "1 RIR" },
  RpeDescriptor { value: 8.5, label: "Hard+", description: "1-2 more reps", reps_in_reserve: "1-2 RIR" },
  RpeDescriptor { value: 8.0, label: "Hard", description: "2 more reps", reps_in_reserve: "2 RIR" },
  RpeDescriptor { value: 7.5, label: "Moderate+", description: "2-3 more reps", reps_in_reserve: "2-3 RIR" },
  RpeDescriptor { value: 7.0, label: "Moderate", description: "3 more reps", reps_in_reserve: "3 RIR" },
  RpeDescriptor { value: 6.0, label: "Moderate-", description: "4 more reps", reps_in_reserve: "4 RIR" },
  RpeDescriptor { value: 5.0, label: "Easy", description: "5+ more reps", reps_in_reserve: "5+ RIR" },
  RpeDescriptor { value: 4.0, label: "Very Easy", description: "Warm-up", reps_in_reserve: "Warmup" },
];

/// Index of the descriptor used when a value is not on the scale
const FALLBACK_DESCRIPTOR: usize = 5;

/// Look up the descriptor for an exact scale value, falling back to the
/// mid-scale entry for anything else
pub fn describe_rpe(rpe: f64) -> &'static RpeDescriptor {
  RPE_SCALE
    .iter()
    .find(|d| d.value == rpe)
    .unwrap_or(&RPE_SCALE[FALLBACK_DESCRIPTOR])
}

/// True when `rpe` is one of the selectable scale values
pub fn is_scale_value(rpe: f64) -> bool {
  RPE_SCALE.iter().any(|d| d.value == rpe)
}
