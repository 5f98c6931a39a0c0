use async_trait::async_trait;
use sme_fin_db::models::FinancingRequestModel;
use sme_fin_db::repository::FindById;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::FinancingRequestRepositoryImpl;
use crate::utils::TryFromRow;

impl FinancingRequestRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &FinancingRequestRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, amount, purpose, repayment_period, status, created_at, updated_at
            FROM financing_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(FinancingRequestModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, FinancingRequestModel> for FinancingRequestRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
