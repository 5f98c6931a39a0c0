//! Builders shared by the repository tests

use chrono::Utc;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use sme_fin_db::models::{AccountModel, FinancingRequestModel, FinancingStatus, OtpChallengeModel};
use std::str::FromStr;
use uuid::Uuid;

/// Account with a random, never-reused email
pub fn create_test_account() -> AccountModel {
    let email = format!("test-{}@example.com", Uuid::new_v4().simple());
    AccountModel::new(HeaplessString::from_str(&email).unwrap(), Utc::now())
}

pub fn create_test_challenge(email: &str, code: &str) -> OtpChallengeModel {
    OtpChallengeModel::issue(
        HeaplessString::from_str(email).unwrap(),
        HeaplessString::from_str(code).unwrap(),
        Utc::now(),
    )
}

pub fn create_test_financing_request(account_id: Uuid, amount: &str) -> FinancingRequestModel {
    let now = Utc::now();
    FinancingRequestModel {
        id: Uuid::new_v4(),
        account_id,
        amount: Decimal::from_str(amount).unwrap(),
        purpose: "Inventory".to_string(),
        repayment_period: 12,
        status: FinancingStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}
