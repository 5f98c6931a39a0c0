use crate::utils::{get_heapless_string, TryFromRow};
use sme_fin_db::models::OtpChallengeModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct OtpChallengeRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl OtpChallengeRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for OtpChallengeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(OtpChallengeModel {
            id: row.try_get("id")?,
            email: get_heapless_string(row, "email")?,
            code: get_heapless_string(row, "code")?,
            expires_at: row.try_get("expires_at")?,
            created_at: row.try_get("created_at")?,
            verified: row.try_get("verified")?,
        })
    }
}
