use async_trait::async_trait;
use sqlx::Database;

use crate::models::account_owned::AccountOwned;

/// Generic repository trait for create-if-absent-else-overwrite records
///
/// Every entity written through this trait is unique per owning account.
/// The first write for an account inserts the record; later writes overwrite
/// all domain fields in place and bump `updated_at`, keeping the original
/// `id` and `created_at`. Concurrent writes resolve last-write-wins.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement AccountOwned trait
///
/// # Example
/// ```ignore
/// impl UpsertByAccount<Postgres, PersonalDetailsModel> for PersonalDetailsRepositoryImpl {
///     async fn upsert(&self, item: PersonalDetailsModel) -> Result<PersonalDetailsModel, Box<dyn Error + Send + Sync>> {
///         // INSERT ... ON CONFLICT (account_id) DO UPDATE ...
///     }
/// }
/// ```
#[async_trait]
pub trait UpsertByAccount<DB: Database, T: AccountOwned>: Send + Sync {
    /// Insert or overwrite the record owned by `item.get_account_id()`
    ///
    /// # Arguments
    /// * `item` - The new field values; its `id` and `created_at` are used only on insert
    ///
    /// # Returns
    /// * `Ok(T)` - The record as stored, carrying the persisted `id` and timestamps
    /// * `Err` - An error if the statement could not be executed
    async fn upsert(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
