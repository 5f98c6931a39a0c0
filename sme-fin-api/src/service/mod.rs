pub mod completion;
pub mod financing;
pub mod otp;
pub mod registration;

pub use completion::CompletionEvaluator;
pub use financing::FinancingLedger;
pub use otp::{OtpCodeSource, OtpVerifier};
pub use registration::RegistrationService;

use sme_fin_db::models::{BusinessDetailsModel, PersonalDetailsModel, TradeLicenseModel};
use sme_fin_db::repository::{
    AccountRecordRepository, AccountRepository, FinancingRequestRepository, OtpChallengeRepository,
};
use sqlx::Database;
use std::sync::Arc;

/// One full set of repositories, held as trait objects.
pub struct RepositorySet<DB: Database> {
    pub accounts: Arc<dyn AccountRepository<DB>>,
    pub otp_challenges: Arc<dyn OtpChallengeRepository<DB>>,
    pub personal_details: Arc<dyn AccountRecordRepository<DB, PersonalDetailsModel>>,
    pub business_details: Arc<dyn AccountRecordRepository<DB, BusinessDetailsModel>>,
    pub trade_licenses: Arc<dyn AccountRecordRepository<DB, TradeLicenseModel>>,
    pub financing_requests: Arc<dyn FinancingRequestRepository<DB>>,
}

impl<DB: Database> Clone for RepositorySet<DB> {
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            otp_challenges: self.otp_challenges.clone(),
            personal_details: self.personal_details.clone(),
            business_details: self.business_details.clone(),
            trade_licenses: self.trade_licenses.clone(),
            financing_requests: self.financing_requests.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RepositorySet;
    use sme_fin_db::memory::InMemoryRepositories;
    use sqlx::Postgres;

    pub fn repository_set(repos: &InMemoryRepositories) -> RepositorySet<Postgres> {
        RepositorySet {
            accounts: repos.account_repository.clone(),
            otp_challenges: repos.otp_challenge_repository.clone(),
            personal_details: repos.personal_details_repository.clone(),
            business_details: repos.business_details_repository.clone(),
            trade_licenses: repos.trade_license_repository.clone(),
            financing_requests: repos.financing_request_repository.clone(),
        }
    }
}
