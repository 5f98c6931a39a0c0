//! Response payloads assembled by the services

use serde::Serialize;
use sme_fin_db::models::{BusinessDetailsModel, PersonalDetailsModel, TradeLicenseModel};
use uuid::Uuid;

/// Outcome of a passcode request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpIssued {
    pub email: String,
    pub message: String,
}

/// Session granted after a successful redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionGrant {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub account_status: String,
}

/// The three registration records of a complete account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationSummary {
    pub personal_info: PersonalDetailsModel,
    pub business_info: BusinessDetailsModel,
    pub trade_license: TradeLicenseModel,
}

/// Everything stored for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSnapshot {
    pub user_id: Uuid,
    pub email: String,
    pub status: String,
    pub personal: Option<PersonalDetailsModel>,
    pub business: Option<BusinessDetailsModel>,
    pub trade_license: Option<TradeLicenseModel>,
}

impl UserSnapshot {
    pub fn summary(&self) -> Option<RegistrationSummary> {
        match (&self.personal, &self.business, &self.trade_license) {
            (Some(personal), Some(business), Some(trade)) => Some(RegistrationSummary {
                personal_info: personal.clone(),
                business_info: business.clone(),
                trade_license: trade.clone(),
            }),
            _ => None,
        }
    }
}

/// Result of a full registration submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullRegistrationOutcome {
    pub personal: PersonalDetailsModel,
    pub business: BusinessDetailsModel,
    pub trade: TradeLicenseModel,
    pub status: String,
    pub summary: Option<RegistrationSummary>,
}
