use async_trait::async_trait;
use sqlx::Database;

/// Repository trait for looking up an entity by its unique email
#[async_trait]
pub trait FindByEmail<DB: Database, T>: Send + Sync {
    /// # Returns
    /// * `Ok(Some(T))` - The entity registered under `email`
    /// * `Ok(None)` - If no entity uses this email
    /// * `Err` - An error if the query could not be executed
    async fn find_by_email(&self, email: &str) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
