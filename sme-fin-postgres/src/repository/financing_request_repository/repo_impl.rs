use crate::utils::TryFromRow;
use sme_fin_db::models::FinancingRequestModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct FinancingRequestRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl FinancingRequestRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for FinancingRequestModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(FinancingRequestModel {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            amount: row.try_get("amount")?,
            purpose: row.try_get("purpose")?,
            repayment_period: row.try_get("repayment_period")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
