use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Repository trait for consuming a one-time passcode challenge
#[async_trait]
pub trait MarkVerified<DB: Database, T>: Send + Sync {
    /// Flip the challenge's `verified` flag, only if it is still unverified
    ///
    /// # Returns
    /// * `Ok(true)` - This call consumed the challenge
    /// * `Ok(false)` - The challenge was already verified (or does not exist)
    /// * `Err` - An error if the statement could not be executed
    async fn mark_verified(&self, id: Uuid) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
