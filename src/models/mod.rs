pub mod effort;

pub use effort::{EffortEntry, NewEffortEntry};
