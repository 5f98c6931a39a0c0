pub mod find_by_email;
pub mod find_by_id;
pub mod find_or_create_by_email;
pub mod repo_impl;

pub use repo_impl::AccountRepositoryImpl;
