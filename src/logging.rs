use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` wins over `default_level`.
/// Safe to call more than once; later calls are no-ops.
pub fn init(default_level: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  if tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .try_init()
    .is_err()
  {
    tracing::debug!("tracing subscriber already installed");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_init_twice_is_harmless() {
    init("debug");
    init("info");
    tracing::info!("still logging");
  }
}
