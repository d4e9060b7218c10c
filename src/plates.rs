//! Barbell plate loading
//!
//! Greedy per-side loading, heaviest plate first. When the available plates
//! cannot hit the target exactly the loadout reports the shortfall instead of
//! failing.

use serde::{Deserialize, Serialize};

static PLATES_KG: [f64; 7] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25];
static PLATES_LBS: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// Per-side remainder above this is reported as an approximation
const EXACT_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
  #[default]
  Kg,
  Lbs,
}

impl Unit {
  pub fn plates(&self) -> &'static [f64] {
    match self {
      Unit::Kg => &PLATES_KG,
      Unit::Lbs => &PLATES_LBS,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Unit::Kg => "kg",
      Unit::Lbs => "lbs",
    }
  }
}

impl std::str::FromStr for Unit {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "kg" => Ok(Self::Kg),
      "lb" | "lbs" => Ok(Self::Lbs),
      _ => Err(format!("Unknown unit: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarType {
  #[default]
  Standard,
  Women,
  Ez,
}

impl BarType {
  pub fn weight(&self, unit: Unit) -> f64 {
    match (unit, self) {
      (Unit::Kg, BarType::Standard) => 20.0,
      (Unit::Kg, BarType::Women) => 15.0,
      (Unit::Kg, BarType::Ez) => 10.0,
      (Unit::Lbs, BarType::Standard) => 45.0,
      (Unit::Lbs, BarType::Women) => 35.0,
      (Unit::Lbs, BarType::Ez) => 20.0,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateCount {
  pub weight: f64,
  /// Plates of this size on each side
  pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateLoadout {
  pub unit: Unit,
  pub bar_weight: f64,
  pub per_side: Vec<PlateCount>,
  /// Bar plus everything loaded on both sides
  pub loaded_total: f64,
  /// Weight (both sides) the plates could not make up
  pub shortfall: f64,
}

impl PlateLoadout {
  pub fn is_exact(&self) -> bool {
    self.shortfall / 2.0 <= EXACT_TOLERANCE
  }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlateError {
  #[error("Enter a valid weight")]
  InvalidTarget,

  #[error("Weight must be at least the bar ({bar}{unit})")]
  BelowBar { bar: f64, unit: &'static str },
}

impl Serialize for PlateError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

pub fn calculate_plates(target: f64, unit: Unit, bar: BarType) -> Result<PlateLoadout, PlateError> {
  if !target.is_finite() || target <= 0.0 {
    return Err(PlateError::InvalidTarget);
  }

  let bar_weight = bar.weight(unit);
  if target < bar_weight {
    return Err(PlateError::BelowBar {
      bar: bar_weight,
      unit: unit.as_str(),
    });
  }

  let mut remaining = (target - bar_weight) / 2.0;
  let mut per_side = Vec::new();

  for &plate in unit.plates() {
    let count = (remaining / plate).floor() as u32;
    if count > 0 {
      per_side.push(PlateCount { weight: plate, count });
      remaining -= count as f64 * plate;
    }
  }

  let plates_weight: f64 = per_side.iter().map(|p| p.weight * p.count as f64 * 2.0).sum();
  let loadout = PlateLoadout {
    unit,
    bar_weight,
    per_side,
    loaded_total: bar_weight + plates_weight,
    shortfall: remaining * 2.0,
  };

  if !loadout.is_exact() {
    tracing::debug!(target_weight = target, shortfall = loadout.shortfall, "plates cannot reach exact target");
  }

  Ok(loadout)
}
