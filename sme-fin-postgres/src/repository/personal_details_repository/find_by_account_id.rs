use async_trait::async_trait;
use sme_fin_db::models::PersonalDetailsModel;
use sme_fin_db::repository::FindByAccountId;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PersonalDetailsRepositoryImpl;
use crate::utils::TryFromRow;

impl PersonalDetailsRepositoryImpl {
    pub(super) async fn find_by_account_id_impl(
        repo: &PersonalDetailsRepositoryImpl,
        account_id: Uuid,
    ) -> Result<Option<PersonalDetailsModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, full_name, email, phone_number, created_at, updated_at
            FROM personal_details
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(PersonalDetailsModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindByAccountId<Postgres, PersonalDetailsModel> for PersonalDetailsRepositoryImpl {
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<PersonalDetailsModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_account_id_impl(self, account_id).await
    }
}
