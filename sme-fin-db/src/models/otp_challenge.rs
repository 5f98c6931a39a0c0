use chrono::{DateTime, Duration, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Length of every issued passcode.
pub const OTP_CODE_LENGTH: usize = 6;

/// Minutes a challenge stays redeemable after issuance.
pub const OTP_VALIDITY_MINUTES: i64 = 10;

/// # Documentation
/// Ephemeral one-time passcode issued for an email address.
///
/// Challenges are linked to accounts by email string only. Several
/// unverified challenges may coexist for the same email; redemption always
/// targets the most recently created one matching the submitted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallengeModel {
    pub id: Uuid,

    pub email: HeaplessString<255>,

    /// Fixed-length numeric passcode
    pub code: HeaplessString<OTP_CODE_LENGTH>,

    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,

    /// Flipped once on successful redemption, never reset
    pub verified: bool,
}

impl OtpChallengeModel {
    /// Builds an unverified challenge that expires `OTP_VALIDITY_MINUTES` after `now`.
    pub fn issue(
        email: HeaplessString<255>,
        code: HeaplessString<OTP_CODE_LENGTH>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            code,
            expires_at: now + Duration::minutes(OTP_VALIDITY_MINUTES),
            created_at: now,
            verified: false,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

impl Identifiable for OtpChallengeModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
