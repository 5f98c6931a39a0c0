pub mod create;
pub mod find_by_id;
pub mod find_latest_by_account_id;
pub mod list_by_account_id;
pub mod repo_impl;

pub use repo_impl::FinancingRequestRepositoryImpl;
