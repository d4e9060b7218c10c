//! UI-boundary commands
//!
//! The app hands us what its form controls hold: raw text from numeric
//! fields and the selected options. These functions parse that input, call
//! the pure calculators, and flatten errors to `String` for display.

pub mod calculators;
pub mod effort_log;
pub mod splits;

/// Parse a numeric text field. Empty or non-numeric text is `None`.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
