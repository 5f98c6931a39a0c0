use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status label of an account whose registration is not yet complete.
pub const STATUS_NEW: &str = "new";

/// Status label of an account holding all three registration records.
pub const STATUS_OLD: &str = "old";

/// # Documentation
/// Completion projection of an account.
///
/// Never persisted. It is rebuilt from the presence of the three registration
/// records on every read, so `is_complete` always equals
/// `has_personal_details && has_business_details && has_trade_license`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub user_id: Uuid,
    pub email: String,
    pub status: String,
    pub has_personal_details: bool,
    pub has_business_details: bool,
    pub has_trade_license: bool,
    pub is_complete: bool,
}

impl AccountStatus {
    pub fn derive(
        user_id: Uuid,
        email: impl Into<String>,
        has_personal_details: bool,
        has_business_details: bool,
        has_trade_license: bool,
    ) -> Self {
        let is_complete = has_personal_details && has_business_details && has_trade_license;
        Self {
            user_id,
            email: email.into(),
            status: if is_complete { STATUS_OLD } else { STATUS_NEW }.to_string(),
            has_personal_details,
            has_business_details,
            has_trade_license,
            is_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_only_when_all_three_present() {
        let id = Uuid::new_v4();
        for mask in 0u8..8 {
            let (p, b, t) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let status = AccountStatus::derive(id, "a@b.com", p, b, t);

            assert_eq!(status.is_complete, p && b && t);
            let expected = if p && b && t { STATUS_OLD } else { STATUS_NEW };
            assert_eq!(status.status, expected);
        }
    }
}
