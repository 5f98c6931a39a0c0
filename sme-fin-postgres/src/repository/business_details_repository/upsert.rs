use async_trait::async_trait;
use sme_fin_db::models::BusinessDetailsModel;
use sme_fin_db::repository::UpsertByAccount;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BusinessDetailsRepositoryImpl;
use crate::utils::TryFromRow;

impl BusinessDetailsRepositoryImpl {
    pub(super) async fn upsert_impl(
        repo: &BusinessDetailsRepositoryImpl,
        item: BusinessDetailsModel,
    ) -> Result<BusinessDetailsModel, Box<dyn Error + Send + Sync>> {
        // On conflict the existing row keeps its id and created_at.
        let row = sqlx::query(
            r#"
            INSERT INTO business_details (id, account_id, business_name, trade_license_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (account_id) DO UPDATE SET
                business_name = EXCLUDED.business_name,
                trade_license_number = EXCLUDED.trade_license_number,
                updated_at = EXCLUDED.updated_at
            RETURNING id, account_id, business_name, trade_license_number, created_at, updated_at
            "#,
        )
        .bind(item.id)
        .bind(item.account_id)
        .bind(item.business_name.as_str())
        .bind(item.trade_license_number.as_str())
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&*repo.pool)
        .await?;

        BusinessDetailsModel::try_from_row(&row)
    }
}

#[async_trait]
impl UpsertByAccount<Postgres, BusinessDetailsModel> for BusinessDetailsRepositoryImpl {
    async fn upsert(&self, item: BusinessDetailsModel) -> Result<BusinessDetailsModel, Box<dyn Error + Send + Sync>> {
        Self::upsert_impl(self, item).await
    }
}
