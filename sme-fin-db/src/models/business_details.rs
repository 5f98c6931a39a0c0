use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;
use crate::models::identifiable::Identifiable;
use crate::models::text_capacity::{LICENSE_NUMBER_BYTES, NAME_BYTES};

/// Business details, one per account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDetailsModel {
    pub id: Uuid,

    #[serde(rename = "user_id")]
    pub account_id: Uuid,

    pub business_name: HeaplessString<NAME_BYTES>,
    pub trade_license_number: HeaplessString<LICENSE_NUMBER_BYTES>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for BusinessDetailsModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl AccountOwned for BusinessDetailsModel {
    fn get_account_id(&self) -> Uuid {
        self.account_id
    }
}
