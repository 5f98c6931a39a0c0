use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;
use crate::models::identifiable::Identifiable;
use crate::models::text_capacity::NAME_BYTES;

/// # Documentation
/// Trade license document reference, one per account.
///
/// `file_url` either comes from the client or is the public URL returned by
/// the object store after an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLicenseModel {
    pub id: Uuid,

    #[serde(rename = "user_id")]
    pub account_id: Uuid,

    pub filename: HeaplessString<NAME_BYTES>,

    pub file_url: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for TradeLicenseModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl AccountOwned for TradeLicenseModel {
    fn get_account_id(&self) -> Uuid {
        self.account_id
    }
}
