use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;

/// Generic repository trait for records held at most once per account
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement AccountOwned trait
#[async_trait]
pub trait FindByAccountId<DB: Database, T: AccountOwned>: Send + Sync {
    /// Find the record owned by the account
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The account's record
    /// * `Ok(None)` - If the account has no such record yet
    /// * `Err` - An error if the query could not be executed
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
