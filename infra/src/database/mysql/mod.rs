//! MySQL repository implementations

pub mod attempt_repository_impl;
pub mod profile_directory_impl;

pub use attempt_repository_impl::MySqlAttemptRepository;
pub use profile_directory_impl::MySqlProfileDirectory;
