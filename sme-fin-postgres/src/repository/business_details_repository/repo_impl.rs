use crate::utils::{get_heapless_string, TryFromRow};
use sme_fin_db::models::BusinessDetailsModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct BusinessDetailsRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl BusinessDetailsRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for BusinessDetailsModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(BusinessDetailsModel {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            business_name: get_heapless_string(row, "business_name")?,
            trade_license_number: get_heapless_string(row, "trade_license_number")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
