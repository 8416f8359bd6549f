use std::str::FromStr;

use inoxviet_application::AuditLogQuery;
use inoxviet_domain::{AuditCategory, AuditSeverity};

use super::*;

pub async fn list_audit_log_handler(
    State(state): State<AppState>,
    Admin(_context): Admin,
    ApiQuery(query): ApiQuery<AuditLogListQuery>,
) -> ApiResult<Json<PageResponse<AuditLogEntryResponse>>> {
    let category = query
        .category
        .as_deref()
        .filter(|value| !value.is_empty() && *value != "all")
        .map(AuditCategory::from_str)
        .transpose()?;
    let severity = query
        .severity
        .as_deref()
        .filter(|value| !value.is_empty() && *value != "all")
        .map(AuditSeverity::from_str)
        .transpose()?;

    let entries = state
        .audit_service
        .list(AuditLogQuery {
            category,
            severity,
            limit: query.limit,
        })
        .await?
        .into_iter()
        .map(AuditLogEntryResponse::from)
        .collect();

    Ok(Json(paginate(
        entries,
        query.page,
        query.page_size,
        state.default_page_size,
    )?))
}

pub async fn delete_audit_log_entry_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
) -> ApiResult<StatusCode> {
    state.audit_service.delete(&context, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
