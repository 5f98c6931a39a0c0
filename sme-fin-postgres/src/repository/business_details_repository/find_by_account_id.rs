use async_trait::async_trait;
use sme_fin_db::models::BusinessDetailsModel;
use sme_fin_db::repository::FindByAccountId;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::BusinessDetailsRepositoryImpl;
use crate::utils::TryFromRow;

impl BusinessDetailsRepositoryImpl {
    pub(super) async fn find_by_account_id_impl(
        repo: &BusinessDetailsRepositoryImpl,
        account_id: Uuid,
    ) -> Result<Option<BusinessDetailsModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, business_name, trade_license_number, created_at, updated_at
            FROM business_details
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(BusinessDetailsModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindByAccountId<Postgres, BusinessDetailsModel> for BusinessDetailsRepositoryImpl {
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<BusinessDetailsModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_account_id_impl(self, account_id).await
    }
}
