//! Per-entity repository bundles
//!
//! Services hold repositories as trait objects. Each bundle trait groups the
//! operations one service needs from one entity and is implemented for every
//! type that provides those operations.

use sqlx::Database;

use crate::models::{AccountModel, AccountOwned, FinancingRequestModel, OtpChallengeModel};
use crate::repository::{
    Create, ExistByAccountId, FindByAccountId, FindByEmail, FindById, FindLatestByAccountId,
    FindLatestUnverified, FindOrCreateByEmail, ListByAccountId, MarkVerified, UpsertByAccount,
};

/// Operations on the identity store
pub trait AccountRepository<DB: Database>:
    FindById<DB, AccountModel> + FindByEmail<DB, AccountModel> + FindOrCreateByEmail<DB, AccountModel>
{
}

impl<DB: Database, R> AccountRepository<DB> for R where
    R: FindById<DB, AccountModel> + FindByEmail<DB, AccountModel> + FindOrCreateByEmail<DB, AccountModel>
{
}

/// Operations on one-time passcode challenges
pub trait OtpChallengeRepository<DB: Database>:
    Create<DB, OtpChallengeModel>
    + FindLatestUnverified<DB, OtpChallengeModel>
    + MarkVerified<DB, OtpChallengeModel>
{
}

impl<DB: Database, R> OtpChallengeRepository<DB> for R where
    R: Create<DB, OtpChallengeModel>
        + FindLatestUnverified<DB, OtpChallengeModel>
        + MarkVerified<DB, OtpChallengeModel>
{
}

/// Operations on a registration record held at most once per account
pub trait AccountRecordRepository<DB: Database, T: AccountOwned>:
    UpsertByAccount<DB, T> + FindByAccountId<DB, T> + ExistByAccountId<DB, T>
{
}

impl<DB: Database, T: AccountOwned, R> AccountRecordRepository<DB, T> for R where
    R: UpsertByAccount<DB, T> + FindByAccountId<DB, T> + ExistByAccountId<DB, T>
{
}

/// Operations on the financing request ledger
pub trait FinancingRequestRepository<DB: Database>:
    Create<DB, FinancingRequestModel>
    + FindById<DB, FinancingRequestModel>
    + ListByAccountId<DB, FinancingRequestModel>
    + FindLatestByAccountId<DB, FinancingRequestModel>
{
}

impl<DB: Database, R> FinancingRequestRepository<DB> for R where
    R: Create<DB, FinancingRequestModel>
        + FindById<DB, FinancingRequestModel>
        + ListByAccountId<DB, FinancingRequestModel>
        + FindLatestByAccountId<DB, FinancingRequestModel>
{
}
