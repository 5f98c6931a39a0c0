pub mod exist_by_account_id;
pub mod find_by_account_id;
pub mod repo_impl;
pub mod upsert;

pub use repo_impl::PersonalDetailsRepositoryImpl;
