pub mod create;
pub mod exist_by_account_id;
pub mod find_by_account_id;
pub mod find_by_email;
pub mod find_by_id;
pub mod find_latest_by_account_id;
pub mod find_latest_unverified;
pub mod find_or_create_by_email;
pub mod list_by_account_id;
pub mod mark_verified;
pub mod repositories;
pub mod upsert_by_account;

// Re-exports
pub use create::*;
pub use exist_by_account_id::*;
pub use find_by_account_id::*;
pub use find_by_email::*;
pub use find_by_id::*;
pub use find_latest_by_account_id::*;
pub use find_latest_unverified::*;
pub use find_or_create_by_email::*;
pub use list_by_account_id::*;
pub use mark_verified::*;
pub use repositories::*;
pub use upsert_by_account::*;
