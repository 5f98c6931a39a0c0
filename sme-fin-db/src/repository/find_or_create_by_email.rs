use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Repository trait for resolving an entity by email, creating it when absent
///
/// Implementations must be safe under concurrent calls for the same email:
/// two callers racing on an unseen email both receive the same entity.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait FindOrCreateByEmail<DB: Database, T: Identifiable>: Send + Sync {
    /// Return the entity registered under the candidate's email, inserting the
    /// candidate first if none exists
    ///
    /// # Arguments
    /// * `candidate` - The entity to insert when the email is unseen
    ///
    /// # Returns
    /// * `Ok((T, true))` - The candidate was inserted
    /// * `Ok((T, false))` - An entity already existed and was returned unchanged
    /// * `Err` - An error if the statement could not be executed
    async fn find_or_create_by_email(
        &self,
        candidate: T,
    ) -> Result<(T, bool), Box<dyn std::error::Error + Send + Sync>>;
}
