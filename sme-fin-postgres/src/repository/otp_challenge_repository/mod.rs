pub mod create;
pub mod find_latest_unverified;
pub mod mark_verified;
pub mod repo_impl;

pub use repo_impl::OtpChallengeRepositoryImpl;
