use async_trait::async_trait;
use sme_fin_db::models::FinancingRequestModel;
use sme_fin_db::repository::FindLatestByAccountId;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::FinancingRequestRepositoryImpl;
use crate::utils::TryFromRow;

impl FinancingRequestRepositoryImpl {
    pub(super) async fn find_latest_by_account_id_impl(
        repo: &FinancingRequestRepositoryImpl,
        account_id: Uuid,
    ) -> Result<Option<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, amount, purpose, repayment_period, status, created_at, updated_at
            FROM financing_requests
            WHERE account_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(FinancingRequestModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindLatestByAccountId<Postgres, FinancingRequestModel> for FinancingRequestRepositoryImpl {
    async fn find_latest_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::find_latest_by_account_id_impl(self, account_id).await
    }
}
