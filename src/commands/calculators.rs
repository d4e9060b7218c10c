use serde::Serialize;

use super::parse_number;
use crate::db::AppState;
use crate::effort::{self, RpeDescriptor};
use crate::plates::{self, BarType, PlateLoadout, Unit};
use crate::strength::{OneRmFormula, StrengthEstimate};
use crate::weight_cut::{self, WeighInDifficulty, WeightCutResult};

/// ---------------------------------------------------------------------------
/// Weight Class Commands
/// ---------------------------------------------------------------------------

/// Cut analysis for the two weight fields. `None` hides the result panel.
pub fn analyze_weight_cut(current_weight: &str, target_weight: &str) -> Option<WeightCutResult> {
  let current = parse_number(current_weight)?;
  let target = parse_number(target_weight)?;
  weight_cut::analyze(current, target)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeighInPlan {
  pub kilos_to_lose: f64,
  pub difficulty: WeighInDifficulty,
  pub advice: &'static str,
}

pub fn plan_weigh_in(current_weight: &str, target_weight: &str) -> Option<WeighInPlan> {
  let current = parse_number(current_weight)?;
  let target = parse_number(target_weight)?;
  let difficulty = weight_cut::weigh_in_difficulty(current, target);
  Some(WeighInPlan {
    kilos_to_lose: weight_cut::kilos_to_lose(current, target),
    difficulty,
    advice: difficulty.advice(),
  })
}

/// ---------------------------------------------------------------------------
/// Effort Commands
/// ---------------------------------------------------------------------------

/// "How many reps did you have left?" -> RPE
pub fn convert_rir(rir: &str) -> Option<f64> {
  parse_number(rir).map(effort::rir_to_rpe)
}

pub fn convert_rpe(rpe: &str) -> Option<f64> {
  parse_number(rpe).map(effort::rpe_to_rir)
}

pub fn describe_effort(rpe: f64) -> &'static RpeDescriptor {
  effort::describe_rpe(rpe)
}

/// ---------------------------------------------------------------------------
/// Strength Commands
/// ---------------------------------------------------------------------------

pub fn estimate_strength(weight: &str, reps: &str, formula: OneRmFormula) -> Option<StrengthEstimate> {
  let weight = parse_number(weight)?;
  let reps: u32 = reps.trim().parse().ok()?;
  StrengthEstimate::compute(weight, reps, formula)
}

/// Plate loadout for the target field. Without an explicit unit the
/// configured default unit is used.
pub fn plan_plates(
  state: &AppState,
  target: &str,
  unit: Option<Unit>,
  bar: BarType,
) -> Result<PlateLoadout, String> {
  let target = parse_number(target).ok_or_else(|| plates::PlateError::InvalidTarget.to_string())?;
  let unit = unit.unwrap_or(state.config.unit);
  plates::calculate_plates(target, unit, bar).map_err(|e| e.to_string())
}
