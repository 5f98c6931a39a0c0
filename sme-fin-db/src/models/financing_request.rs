use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::account_owned::AccountOwned;
use crate::models::identifiable::Identifiable;

/// Lifecycle of a financing request. New requests always start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(type_name = "financing_status", rename_all = "lowercase")]
pub enum FinancingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Disbursed,
}

impl FinancingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancingStatus::Pending => "pending",
            FinancingStatus::Approved => "approved",
            FinancingStatus::Rejected => "rejected",
            FinancingStatus::Disbursed => "disbursed",
        }
    }
}

impl std::fmt::Display for FinancingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FinancingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FinancingStatus::Pending),
            "approved" => Ok(FinancingStatus::Approved),
            "rejected" => Ok(FinancingStatus::Rejected),
            "disbursed" => Ok(FinancingStatus::Disbursed),
            _ => Err(()),
        }
    }
}

impl Serialize for FinancingStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FinancingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        FinancingStatus::from_str(&value_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid FinancingStatus: {value_str}")))
    }
}

/// # Documentation
/// A request for financing submitted by a fully registered account.
///
/// Requests are append-only: the ledger never updates or deletes them, and an
/// account may hold any number of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingRequestModel {
    pub id: Uuid,

    #[serde(rename = "user_id")]
    pub account_id: Uuid,

    /// Requested amount, strictly positive
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    pub purpose: String,

    /// Repayment period in months, strictly positive
    pub repayment_period: i32,

    pub status: FinancingStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for FinancingRequestModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl AccountOwned for FinancingRequestModel {
    fn get_account_id(&self) -> Uuid {
        self.account_id
    }
}
