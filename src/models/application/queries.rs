use async_trait::async_trait;
use sqlx::PgPool;

use super::types::{ApplicationRecord, NewApplication};
use crate::pipeline::{ApplicationStore, StoreError};

/// Insert one application and return its id.
pub async fn insert(pool: &PgPool, new: &NewApplication) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO applications \
             (full_name, whatsapp, responsible_name, responsible_phone, region, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id",
    )
    .bind(&new.full_name)
    .bind(&new.whatsapp)
    .bind(&new.responsible_name)
    .bind(&new.responsible_phone)
    .bind(&new.region)
    .bind(new.created_at)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ApplicationRecord>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRecord>(
        "SELECT id, full_name, whatsapp, responsible_name, responsible_phone, region, created_at \
         FROM applications WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Postgres-backed store used by the running server.
#[derive(Clone)]
pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn insert(&self, record: &NewApplication) -> Result<i64, StoreError> {
        Ok(insert(&self.pool, record).await?)
    }
}
