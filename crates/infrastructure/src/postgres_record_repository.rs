use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;

use inoxviet_application::RecordRepository;
use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::Record;


/// PostgreSQL-backed collection storing each record as a JSONB document.
///
/// All collections share the `records` table, partitioned by the kind's
/// collection name. The slug is mirrored into its own column for lookups.
pub struct PostgresRecordRepository<T> {
    pool: PgPool,
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for PostgresRecordRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: Record> PostgresRecordRepository<T> {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            marker: PhantomData,
        }
    }

    fn collection() -> &'static str {
        T::KIND.collection()
    }

    fn encode(record: &T) -> AppResult<Json<Value>> {
        serde_json::to_value(record).map(Json).map_err(|error| {
            AppError::Internal(format!(
                "failed to encode {} record: {error}",
                Self::collection()
            ))
        })
    }

    fn decode(data: Json<Value>) -> AppResult<T> {
        serde_json::from_value(data.0).map_err(|error| {
            AppError::Internal(format!(
                "failed to decode {} record: {error}",
                Self::collection()
            ))
        })
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for PostgresRecordRepository<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        let rows = sqlx::query_scalar::<_, Json<Value>>(
            r#"
            SELECT data
            FROM records
            WHERE collection = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(Self::collection())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list {} records: {error}",
                Self::collection()
            ))
        })?;

        rows.into_iter().map(Self::decode).collect()
    }

    async fn find(&self, id: RecordId) -> AppResult<Option<T>> {
        let row = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT data FROM records WHERE collection = $1 AND id = $2",
        )
        .bind(Self::collection())
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find {} record: {error}",
                Self::collection()
            ))
        })?;

        row.map(Self::decode).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<T>> {
        let row = sqlx::query_scalar::<_, Json<Value>>(
            r#"
            SELECT data
            FROM records
            WHERE collection = $1 AND slug = $2
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(Self::collection())
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find {} record by slug: {error}",
                Self::collection()
            ))
        })?;

        row.map(Self::decode).transpose()
    }

    async fn insert(&self, record: T) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO records (collection, id, slug, data)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (collection, id) DO NOTHING
            "#,
        )
        .bind(Self::collection())
        .bind(record.id().as_uuid())
        .bind(record.slug())
        .bind(Self::encode(&record)?)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to insert {} record: {error}",
                Self::collection()
            ))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "{} '{}' already exists",
                T::KIND.action_prefix(),
                record.id()
            )));
        }

        Ok(())
    }

    async fn update(&self, record: T) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE records
            SET slug = $3, data = $4, updated_at = clock_timestamp()
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(Self::collection())
        .bind(record.id().as_uuid())
        .bind(record.slug())
        .bind(Self::encode(&record)?)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to update {} record: {error}",
                Self::collection()
            ))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} '{}' does not exist",
                T::KIND.action_prefix(),
                record.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: RecordId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM records WHERE collection = $1 AND id = $2")
            .bind(Self::collection())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to delete {} record: {error}",
                    Self::collection()
                ))
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} '{id}' does not exist",
                T::KIND.action_prefix()
            )));
        }

        Ok(())
    }
}
