use async_trait::async_trait;
use sqlx::Database;

/// Repository trait for locating a redeemable one-time passcode challenge
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The challenge entity type
#[async_trait]
pub trait FindLatestUnverified<DB: Database, T>: Send + Sync {
    /// Find the most recently created unverified challenge for (email, code)
    ///
    /// Expiry is not evaluated here; the caller decides what an expired match means.
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The newest matching unverified challenge
    /// * `Ok(None)` - If no unverified challenge matches
    /// * `Err` - An error if the query could not be executed
    async fn find_latest_unverified(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
