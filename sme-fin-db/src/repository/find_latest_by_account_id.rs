use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;

/// Generic repository trait for fetching an account's most recent record
#[async_trait]
pub trait FindLatestByAccountId<DB: Database, T: AccountOwned>: Send + Sync {
    /// # Returns
    /// * `Ok(Some(T))` - The record with the greatest `created_at`
    /// * `Ok(None)` - If the account has no records
    /// * `Err` - An error if the query could not be executed
    async fn find_latest_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
