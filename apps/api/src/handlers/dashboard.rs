use super::*;

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
) -> ApiResult<Json<DashboardSummary>> {
    Ok(Json(state.dashboard_service.summary(&context).await?))
}
