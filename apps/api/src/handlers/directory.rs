use std::str::FromStr;

use serde::Deserialize;

use super::*;

#[derive(Debug, Default, Deserialize)]
pub struct AgentQuery {
    pub region: Option<String>,
}

pub async fn public_agents_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AgentQuery>,
) -> ApiResult<Json<Vec<Agent>>> {
    Ok(Json(
        state
            .directory_service
            .active_agents(query.region.as_deref())
            .await?,
    ))
}

pub async fn set_agent_active_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<ActiveRequest>,
) -> ApiResult<Json<Agent>> {
    Ok(Json(
        state
            .directory_service
            .set_agent_active(&context, id, payload.active)
            .await?,
    ))
}

pub async fn set_user_active_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<ActiveRequest>,
) -> ApiResult<Json<AdminUser>> {
    Ok(Json(
        state
            .directory_service
            .set_user_active(&context, id, payload.active)
            .await?,
    ))
}

pub async fn set_user_role_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<RoleRequest>,
) -> ApiResult<Json<AdminUser>> {
    let role = UserRole::from_str(payload.role.as_str())?;
    Ok(Json(
        state
            .directory_service
            .set_user_role(&context, id, role)
            .await?,
    ))
}
