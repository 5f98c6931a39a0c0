use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;

/// Generic repository trait for checking whether an account holds a record
///
/// Cheaper than `FindByAccountId` when only presence matters, which is the
/// case for the completion projection.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement AccountOwned trait
#[async_trait]
pub trait ExistByAccountId<DB: Database, T: AccountOwned>: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - The account holds a record of type `T`
    /// * `Ok(false)` - It does not
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
