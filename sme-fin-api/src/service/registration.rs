use sme_fin_db::models::{BusinessDetailsModel, PersonalDetailsModel, TradeLicenseModel};
use sqlx::Database;
use std::sync::Arc;
use uuid::Uuid;

use crate::clock::Clock;
use crate::domain::{
    BusinessDetailsInput, FullRegistrationInput, FullRegistrationOutcome, PersonalDetailsInput,
    TradeLicenseInput,
};
use crate::error::{storage_failure, ApiError, ApiResult};
use crate::service::{CompletionEvaluator, RepositorySet};
use crate::storage::{DocumentStore, UploadedFile};

/// Writes the three registration records of an account.
///
/// Each record is upserted by account id: the first write creates it, later
/// writes overwrite every field in place. Concurrent writes for the same
/// account resolve last-write-wins.
pub struct RegistrationService<DB: Database> {
    repos: RepositorySet<DB>,
    completion: Arc<CompletionEvaluator<DB>>,
    store: Option<Arc<dyn DocumentStore>>,
    clock: Arc<dyn Clock>,
}

impl<DB: Database> RegistrationService<DB> {
    pub fn new(
        repos: RepositorySet<DB>,
        completion: Arc<CompletionEvaluator<DB>>,
        store: Option<Arc<dyn DocumentStore>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            completion,
            store,
            clock,
        }
    }

    pub async fn upsert_personal_details(
        &self,
        account_id: Uuid,
        input: &PersonalDetailsInput,
    ) -> ApiResult<PersonalDetailsModel> {
        input.check()?;
        let record = input.to_record(account_id, self.clock.now())?;
        self.save_personal_details(account_id, record).await
    }

    pub async fn upsert_business_details(
        &self,
        account_id: Uuid,
        input: &BusinessDetailsInput,
    ) -> ApiResult<BusinessDetailsModel> {
        input.check()?;
        let record = input.to_record(account_id, self.clock.now())?;
        self.save_business_details(account_id, record).await
    }

    pub async fn upsert_trade_license(
        &self,
        account_id: Uuid,
        input: &TradeLicenseInput,
    ) -> ApiResult<TradeLicenseModel> {
        input.check(false)?;
        let record = input.to_record(account_id, self.clock.now())?;
        self.save_trade_license(account_id, record).await
    }

    /// Saves all three records as one submission.
    ///
    /// Every field is validated and converted before the upload runs, and the
    /// upload completes before anything is written, so a rejected submission
    /// leaves neither records nor orphaned files behind.
    pub async fn full_registration(
        &self,
        account_id: Uuid,
        mut input: FullRegistrationInput,
        upload: Option<UploadedFile>,
    ) -> ApiResult<FullRegistrationOutcome> {
        if let Some(file) = &upload {
            file.check()?;
            input.trade.filename = file.filename.clone();
        }
        let mut records = input.into_records(account_id, upload.is_some(), self.clock.now())?;

        if let Some(file) = &upload {
            records.trade.file_url = self.store_document(account_id, file).await?;
        }

        let personal = self.save_personal_details(account_id, records.personal).await?;
        let business = self.save_business_details(account_id, records.business).await?;
        let trade = self.save_trade_license(account_id, records.trade).await?;

        let snapshot = self.completion.snapshot(account_id).await?;
        tracing::info!(user_id = %account_id, status = %snapshot.status, "Full registration saved");

        Ok(FullRegistrationOutcome {
            summary: snapshot.summary(),
            status: snapshot.status,
            personal,
            business,
            trade,
        })
    }

    async fn store_document(&self, account_id: Uuid, file: &UploadedFile) -> ApiResult<String> {
        let store = self.store.as_ref().ok_or_else(|| {
            tracing::error!(user_id = %account_id, "Upload attempted without configured storage");
            ApiError::Internal("Failed to upload file: storage is not configured".to_string())
        })?;
        let url = store
            .upload(file)
            .await
            .map_err(storage_failure("Failed to upload file", account_id))?;
        tracing::info!(user_id = %account_id, filename = %file.filename, "Trade license uploaded");
        Ok(url)
    }

    async fn save_personal_details(
        &self,
        account_id: Uuid,
        record: PersonalDetailsModel,
    ) -> ApiResult<PersonalDetailsModel> {
        self.repos
            .personal_details
            .upsert(record)
            .await
            .map_err(storage_failure("Failed to save personal details", account_id))
    }

    async fn save_business_details(
        &self,
        account_id: Uuid,
        record: BusinessDetailsModel,
    ) -> ApiResult<BusinessDetailsModel> {
        self.repos
            .business_details
            .upsert(record)
            .await
            .map_err(storage_failure("Failed to save business details", account_id))
    }

    async fn save_trade_license(
        &self,
        account_id: Uuid,
        record: TradeLicenseModel,
    ) -> ApiResult<TradeLicenseModel> {
        self.repos
            .trade_licenses
            .upsert(record)
            .await
            .map_err(storage_failure("Failed to save trade license", account_id))
    }
}
