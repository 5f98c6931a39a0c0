use async_trait::async_trait;
use sme_fin_db::models::FinancingRequestModel;
use sme_fin_db::repository::ListByAccountId;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::FinancingRequestRepositoryImpl;
use crate::utils::TryFromRow;

impl FinancingRequestRepositoryImpl {
    pub(super) async fn list_by_account_id_impl(
        repo: &FinancingRequestRepositoryImpl,
        account_id: Uuid,
    ) -> Result<Vec<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT id, account_id, amount, purpose, repayment_period, status, created_at, updated_at
            FROM financing_requests
            WHERE account_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(FinancingRequestModel::try_from_row).collect()
    }
}

#[async_trait]
impl ListByAccountId<Postgres, FinancingRequestModel> for FinancingRequestRepositoryImpl {
    async fn list_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::list_by_account_id_impl(self, account_id).await
    }
}
