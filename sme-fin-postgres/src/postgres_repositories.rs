use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::{
    AccountRepositoryImpl, BusinessDetailsRepositoryImpl, FinancingRequestRepositoryImpl,
    OtpChallengeRepositoryImpl, PersonalDetailsRepositoryImpl, TradeLicenseRepositoryImpl,
};

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create all repositories sharing the same connection pool
    pub fn create_all_repositories(&self) -> Repositories {
        Repositories {
            account_repository: Arc::new(AccountRepositoryImpl::new(self.pool.clone())),
            otp_challenge_repository: Arc::new(OtpChallengeRepositoryImpl::new(self.pool.clone())),
            personal_details_repository: Arc::new(PersonalDetailsRepositoryImpl::new(
                self.pool.clone(),
            )),
            business_details_repository: Arc::new(BusinessDetailsRepositoryImpl::new(
                self.pool.clone(),
            )),
            trade_license_repository: Arc::new(TradeLicenseRepositoryImpl::new(self.pool.clone())),
            financing_request_repository: Arc::new(FinancingRequestRepositoryImpl::new(
                self.pool.clone(),
            )),
        }
    }
}

#[derive(Clone)]
pub struct Repositories {
    pub account_repository: Arc<AccountRepositoryImpl>,
    pub otp_challenge_repository: Arc<OtpChallengeRepositoryImpl>,
    pub personal_details_repository: Arc<PersonalDetailsRepositoryImpl>,
    pub business_details_repository: Arc<BusinessDetailsRepositoryImpl>,
    pub trade_license_repository: Arc<TradeLicenseRepositoryImpl>,
    pub financing_request_repository: Arc<FinancingRequestRepositoryImpl>,
}
