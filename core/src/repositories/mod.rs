pub mod attempt;
pub mod profile;

pub use attempt::{AttemptRepository, MockAttemptRepository};
pub use profile::{MockProfileDirectory, ProfileDirectory};
