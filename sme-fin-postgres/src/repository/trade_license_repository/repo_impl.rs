use crate::utils::{get_heapless_string, TryFromRow};
use sme_fin_db::models::TradeLicenseModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct TradeLicenseRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl TradeLicenseRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for TradeLicenseModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(TradeLicenseModel {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            filename: get_heapless_string(row, "filename")?,
            file_url: row.try_get("file_url")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
