pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockAttemptRepository;
pub use r#trait::AttemptRepository;

#[cfg(test)]
mod tests;
