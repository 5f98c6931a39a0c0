use async_trait::async_trait;
use sme_fin_db::models::OtpChallengeModel;
use sme_fin_db::repository::MarkVerified;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::OtpChallengeRepositoryImpl;

impl OtpChallengeRepositoryImpl {
    pub(super) async fn mark_verified_impl(
        repo: &OtpChallengeRepositoryImpl,
        id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        // The verified guard makes concurrent redemptions of one challenge race
        // to a single winner.
        let result = sqlx::query(
            r#"
            UPDATE otp_challenges
            SET verified = TRUE
            WHERE id = $1 AND verified = FALSE
            "#,
        )
        .bind(id)
        .execute(&*repo.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

#[async_trait]
impl MarkVerified<Postgres, OtpChallengeModel> for OtpChallengeRepositoryImpl {
    async fn mark_verified(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::mark_verified_impl(self, id).await
    }
}
