pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockProfileDirectory;
pub use r#trait::ProfileDirectory;
