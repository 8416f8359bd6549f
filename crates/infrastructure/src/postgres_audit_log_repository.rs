use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use inoxviet_application::{AuditLogQuery, AuditLogRepository, AuditRecord};
use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::{AuditCategory, AuditLogEntry, AuditSeverity};


/// PostgreSQL-backed audit trail.
#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: Uuid,
    action: String,
    category: String,
    severity: String,
    details: String,
    user_id: Option<String>,
    actor_details: Option<String>,
    ip_address: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLogEntry {
    type Error = AppError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::from_uuid(row.id),
            action: row.action,
            category: AuditCategory::from_str(row.category.as_str())?,
            severity: AuditSeverity::from_str(row.severity.as_str())?,
            details: row.details,
            user_id: row.user_id,
            actor_details: row.actor_details,
            ip_address: row.ip_address,
            created_at: row.created_at,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    id, action, category, severity, details, user_id, actor_details, ip_address, created_at
"#;

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append(&self, record: AuditRecord) -> AppResult<AuditLogEntry> {
        let row = sqlx::query_as::<_, AuditLogRow>(&format!(
            r#"
            INSERT INTO audit_logs (
                id, action, category, severity, details, user_id, actor_details, ip_address
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(RecordId::new().as_uuid())
        .bind(record.action.as_str())
        .bind(record.category.as_str())
        .bind(record.severity.as_str())
        .bind(record.details.as_str())
        .bind(record.user_id.as_deref())
        .bind(record.actor_details.as_deref())
        .bind(record.ip_address.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to append audit log entry: {error}")))?;

        AuditLogEntry::try_from(row)
    }

    async fn list(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let limit = query
            .limit
            .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX));
        let rows = sqlx::query_as::<_, AuditLogRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM audit_logs
            WHERE ($1::TEXT IS NULL OR category = $1)
                AND ($2::TEXT IS NULL OR severity = $2)
            ORDER BY created_at DESC, seq DESC
            LIMIT $3
            "#
        ))
        .bind(query.category.map(|category| category.as_str()))
        .bind(query.severity.map(|severity| severity.as_str()))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list audit log entries: {error}")))?;

        rows.into_iter().map(AuditLogEntry::try_from).collect()
    }

    async fn find(&self, id: RecordId) -> AppResult<Option<AuditLogEntry>> {
        let row = sqlx::query_as::<_, AuditLogRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM audit_logs WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find audit log entry: {error}")))?;

        row.map(AuditLogEntry::try_from).transpose()
    }

    async fn delete(&self, id: RecordId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM audit_logs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to delete audit log entry: {error}"))
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "audit log entry '{id}' does not exist"
            )));
        }

        Ok(())
    }
}
