use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for appending a single entity
///
/// Used for records that are only ever inserted, never updated in place
/// (OTP challenges, financing requests).
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Postgres, FinancingRequestModel> for FinancingRequestRepositoryImpl {
///     async fn create(&self, item: FinancingRequestModel) -> Result<FinancingRequestModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert the entity
    ///
    /// # Arguments
    /// * `item` - The entity to insert, with its id already assigned
    ///
    /// # Returns
    /// * `Ok(T)` - The entity as stored
    /// * `Err` - An error if the insert could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
