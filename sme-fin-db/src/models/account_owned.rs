use uuid::Uuid;

use super::identifiable::Identifiable;

/// Trait for records that belong to exactly one account
pub trait AccountOwned: Identifiable {
    /// Returns the id of the owning account
    fn get_account_id(&self) -> Uuid;
}
