use crate::utils::{get_heapless_string, TryFromRow};
use sme_fin_db::models::PersonalDetailsModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct PersonalDetailsRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl PersonalDetailsRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for PersonalDetailsModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PersonalDetailsModel {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            full_name: get_heapless_string(row, "full_name")?,
            email: get_heapless_string(row, "email")?,
            phone_number: get_heapless_string(row, "phone_number")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
