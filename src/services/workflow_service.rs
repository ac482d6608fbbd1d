use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    dto::pickups::{PickupDetailList, WorkflowQuery},
    entity::{Pickups, pickups},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_admin},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::pickup_service::with_details,
    state::AppState,
};

fn filter_condition(query: &WorkflowQuery) -> Condition {
    let mut condition = Condition::all();
    if let Some(date) = query.date {
        condition = condition.add(pickups::Column::PickupDate.eq(date));
    }
    if let Some(partner_id) = query.partner_id {
        condition = condition.add(pickups::Column::PartnerId.eq(partner_id));
    }
    if let Some(location_id) = query.location_id {
        condition = condition.add(pickups::Column::LocationId.eq(location_id));
    }
    condition
}

/// Every pickup across donors, latest pickup date first.
pub async fn list_workflow(
    state: &AppState,
    user: &AuthUser,
    query: WorkflowQuery,
) -> AppResult<ApiResponse<PickupDetailList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = Pagination {
        page: query.page,
        per_page: query.per_page,
    }
    .normalize();
    let condition = filter_condition(&query);

    let total = Pickups::find()
        .filter(condition.clone())
        .count(&state.orm)
        .await? as i64;

    let rows = Pickups::find()
        .filter(condition)
        .order_by_desc(pickups::Column::PickupDate)
        .order_by_desc(pickups::Column::Id)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;

    let items = with_details(&state.orm, rows).await?;
    Ok(ApiResponse::success(
        "Workflow",
        PickupDetailList { items },
        Some(Meta::new(page, limit, total)),
    ))
}
