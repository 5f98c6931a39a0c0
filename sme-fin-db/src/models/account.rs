use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// Identity anchor for every other record.
///
/// - Keyed by email, which is unique across accounts.
/// - Created the first time a one-time passcode is requested for an unseen email.
/// - Never modified afterwards except for its timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    pub id: Uuid,

    pub email: HeaplessString<255>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountModel {
    pub fn new(email: HeaplessString<255>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for AccountModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
