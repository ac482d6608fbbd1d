use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::pickups::{PickupDetailList, WorkflowQuery},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::workflow_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_workflow))
}

#[utoipa::path(
    get,
    path = "/api/workflow",
    params(WorkflowQuery),
    responses(
        (status = 200, description = "All pickups, latest date first", body = ApiResponse<PickupDetailList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Workflow"
)]
pub async fn list_workflow(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<WorkflowQuery>,
) -> AppResult<Json<ApiResponse<PickupDetailList>>> {
    let resp = workflow_service::list_workflow(&state, &user, query).await?;
    Ok(Json(resp))
}
