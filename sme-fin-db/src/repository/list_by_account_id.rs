use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;

/// Generic repository trait for listing every record owned by an account
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement AccountOwned trait
#[async_trait]
pub trait ListByAccountId<DB: Database, T: AccountOwned>: Send + Sync {
    /// List the account's records, newest first
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The records ordered by `created_at` descending; empty if none exist
    /// * `Err` - An error if the query could not be executed
    async fn list_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
