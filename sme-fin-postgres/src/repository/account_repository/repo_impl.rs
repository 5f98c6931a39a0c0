use crate::utils::{get_heapless_string, TryFromRow};
use sme_fin_db::models::AccountModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct AccountRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl AccountRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for AccountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AccountModel {
            id: row.try_get("id")?,
            email: get_heapless_string(row, "email")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
