//! In-process repositories
//!
//! Implement every repository trait over `tokio::sync::RwLock`-guarded
//! collections. They back service and HTTP tests, and mirror the Postgres
//! semantics: unique email, one registration record per account, newest-first
//! listing.

pub mod account;
pub mod account_record;
pub mod financing_request;
pub mod otp_challenge;

pub use account::InMemoryAccountRepository;
pub use account_record::{InMemoryAccountRecordRepository, KeepIdentity};
pub use financing_request::InMemoryFinancingRequestRepository;
pub use otp_challenge::InMemoryOtpChallengeRepository;

use std::sync::Arc;

use crate::models::{BusinessDetailsModel, PersonalDetailsModel, TradeLicenseModel};

/// Container for one full set of in-process repositories
#[derive(Clone, Default)]
pub struct InMemoryRepositories {
    pub account_repository: Arc<InMemoryAccountRepository>,
    pub otp_challenge_repository: Arc<InMemoryOtpChallengeRepository>,
    pub personal_details_repository: Arc<InMemoryAccountRecordRepository<PersonalDetailsModel>>,
    pub business_details_repository: Arc<InMemoryAccountRecordRepository<BusinessDetailsModel>>,
    pub trade_license_repository: Arc<InMemoryAccountRecordRepository<TradeLicenseModel>>,
    pub financing_request_repository: Arc<InMemoryFinancingRequestRepository>,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}
