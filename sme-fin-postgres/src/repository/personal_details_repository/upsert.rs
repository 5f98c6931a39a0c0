use async_trait::async_trait;
use sme_fin_db::models::PersonalDetailsModel;
use sme_fin_db::repository::UpsertByAccount;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::PersonalDetailsRepositoryImpl;
use crate::utils::TryFromRow;

impl PersonalDetailsRepositoryImpl {
    pub(super) async fn upsert_impl(
        repo: &PersonalDetailsRepositoryImpl,
        item: PersonalDetailsModel,
    ) -> Result<PersonalDetailsModel, Box<dyn Error + Send + Sync>> {
        // On conflict the existing row keeps its id and created_at.
        let row = sqlx::query(
            r#"
            INSERT INTO personal_details (id, account_id, full_name, email, phone_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (account_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                email = EXCLUDED.email,
                phone_number = EXCLUDED.phone_number,
                updated_at = EXCLUDED.updated_at
            RETURNING id, account_id, full_name, email, phone_number, created_at, updated_at
            "#,
        )
        .bind(item.id)
        .bind(item.account_id)
        .bind(item.full_name.as_str())
        .bind(item.email.as_str())
        .bind(item.phone_number.as_str())
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&*repo.pool)
        .await?;

        PersonalDetailsModel::try_from_row(&row)
    }
}

#[async_trait]
impl UpsertByAccount<Postgres, PersonalDetailsModel> for PersonalDetailsRepositoryImpl {
    async fn upsert(&self, item: PersonalDetailsModel) -> Result<PersonalDetailsModel, Box<dyn Error + Send + Sync>> {
        Self::upsert_impl(self, item).await
    }
}
