use crate::db::AppState;
use crate::splits::{SplitRequest, TrainingSplitTemplate};

/// "Generate split" button: validate the three selections, then pick a
/// template from the catalog loaded at startup
pub fn generate_split(
  state: &AppState,
  request: &SplitRequest,
) -> Result<TrainingSplitTemplate, String> {
  let input = request.validate().map_err(|e| {
    tracing::debug!(error = %e, "split request rejected");
    e.to_string()
  })?;

  state
    .catalog
    .select(input.days_per_week, input.goal, input.level)
    .cloned()
    .map_err(|e| e.to_string())
}
