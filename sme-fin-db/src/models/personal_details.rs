use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;
use crate::models::identifiable::Identifiable;
use crate::models::text_capacity::NAME_BYTES;

/// # Documentation
/// Personal details of the account holder.
///
/// At most one record exists per account. Writes go through
/// `UpsertByAccount`, so a second submission overwrites the first in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetailsModel {
    pub id: Uuid,

    /// Reference to the owning account
    #[serde(rename = "user_id")]
    pub account_id: Uuid,

    pub full_name: HeaplessString<NAME_BYTES>,

    /// Contact email, independent from the account's login email
    pub email: HeaplessString<255>,

    /// Phone number as submitted (formatting characters preserved)
    pub phone_number: HeaplessString<32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for PersonalDetailsModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl AccountOwned for PersonalDetailsModel {
    fn get_account_id(&self) -> Uuid {
        self.account_id
    }
}
