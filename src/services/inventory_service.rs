use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use validator::Validate;

use crate::{
    audit,
    db::OrmConn,
    dto::inventory::{InventoryList, InventoryQuery, InventoryRequest, StatusCount},
    entity::{Inventory, Partners, ToyConditions, inventory},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{InventoryItem, InventoryStatus, LogisticsStatus},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_inventory(
    state: &AppState,
    user: &AuthUser,
    query: InventoryQuery,
) -> AppResult<ApiResponse<InventoryList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = Pagination {
        page: query.page,
        per_page: query.per_page,
    }
    .normalize();

    let mut condition = Condition::all();
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        let status = status
            .parse::<InventoryStatus>()
            .map_err(|_| AppError::field("status", "Unknown inventory status"))?;
        condition = condition.add(inventory::Column::Status.eq(status.as_str()));
    }

    let total = Inventory::find()
        .filter(condition.clone())
        .count(&state.orm)
        .await? as i64;

    let items = Inventory::find()
        .filter(condition)
        .find_also_related(ToyConditions)
        .order_by_desc(inventory::Column::ReceivedAt)
        .order_by_desc(inventory::Column::Id)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(item, condition)| InventoryItem::with_condition(item, condition))
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Inventory", InventoryList { items }, Some(meta)))
}

pub async fn get_inventory_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<InventoryItem>> {
    ensure_admin(user)?;
    let (item, condition) = Inventory::find_by_id(id)
        .find_also_related(ToyConditions)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(
        "Inventory item",
        InventoryItem::with_condition(item, condition),
        None,
    ))
}

/// Validate the form and its references; returns the parsed status.
async fn check_request(conn: &OrmConn, payload: &InventoryRequest) -> AppResult<InventoryStatus> {
    payload.validate()?;
    let status = payload
        .status
        .parse::<InventoryStatus>()
        .map_err(|_| AppError::field("status", "Please select a valid status"))?;

    if let Some(condition_id) = payload.condition_id {
        if ToyConditions::find_by_id(condition_id).one(conn).await?.is_none() {
            return Err(AppError::field("condition_id", "Please select a condition"));
        }
    }
    if let Some(partner_id) = payload.redistributed_to_partner_id {
        if Partners::find_by_id(partner_id).one(conn).await?.is_none() {
            return Err(AppError::field(
                "redistributed_to_partner_id",
                "Partner does not exist",
            ));
        }
    }
    Ok(status)
}

fn delivered_if_redistributed(status: InventoryStatus, partner_id: Option<i32>) -> Option<String> {
    match (status, partner_id) {
        (InventoryStatus::Redistributed, Some(_)) => {
            Some(LogisticsStatus::Delivered.as_str().to_string())
        }
        _ => None,
    }
}

pub async fn create_inventory_item(
    state: &AppState,
    user: &AuthUser,
    payload: InventoryRequest,
) -> AppResult<ApiResponse<InventoryItem>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    let status = check_request(&state.orm, &payload).await?;
    let condition_id = payload
        .condition_id
        .ok_or_else(|| AppError::field("condition_id", "Please select a condition"))?;

    let item = inventory::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        condition_id: Set(condition_id),
        status: Set(status.as_str().to_string()),
        image_url: Set(payload.image_url),
        image_hint: Set(payload.image_hint),
        redistributed_to_partner_id: Set(payload.redistributed_to_partner_id),
        logistics_status: Set(delivered_if_redistributed(
            status,
            payload.redistributed_to_partner_id,
        )),
        received_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.user_id,
        "inventory_create",
        "inventory",
        serde_json::json!({ "inventory_id": item.id }),
    )
    .await;

    let condition = ToyConditions::find_by_id(item.condition_id)
        .one(&state.orm)
        .await?;
    Ok(ApiResponse::success(
        "Item created successfully.",
        InventoryItem::with_condition(item, condition),
        Some(Meta::empty()),
    ))
}

/// Full replacement of an item. Moving an item to `redistributed` with a
/// partner marks it delivered; any other status clears the logistics state.
pub async fn update_inventory_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: InventoryRequest,
) -> AppResult<ApiResponse<InventoryItem>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    let existing = Inventory::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let status = check_request(&state.orm, &payload).await?;
    let condition_id = payload
        .condition_id
        .ok_or_else(|| AppError::field("condition_id", "Please select a condition"))?;

    let mut active: inventory::ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.condition_id = Set(condition_id);
    active.status = Set(status.as_str().to_string());
    active.image_url = Set(payload.image_url);
    active.image_hint = Set(payload.image_hint);
    active.redistributed_to_partner_id = Set(payload.redistributed_to_partner_id);
    if let Some(delivered) =
        delivered_if_redistributed(status, payload.redistributed_to_partner_id)
    {
        active.logistics_status = Set(Some(delivered));
    } else if status != InventoryStatus::Redistributed {
        active.logistics_status = Set(None);
    }
    let item = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "inventory_update",
        "inventory",
        serde_json::json!({ "inventory_id": id, "status": status.as_str() }),
    )
    .await;

    let condition = ToyConditions::find_by_id(item.condition_id)
        .one(&state.orm)
        .await?;
    Ok(ApiResponse::success(
        "Item updated successfully.",
        InventoryItem::with_condition(item, condition),
        Some(Meta::empty()),
    ))
}

/// Removes the item together with the donation that references it.
pub async fn delete_inventory_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Inventory::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user.user_id,
        "inventory_delete",
        "inventory",
        serde_json::json!({ "inventory_id": id }),
    )
    .await;

    Ok(ApiResponse::done("Item deleted successfully."))
}

/// Item count for every status, including statuses with no items.
pub async fn counts_by_status(conn: &OrmConn) -> AppResult<Vec<StatusCount>> {
    let rows: Vec<(String, i64)> = Inventory::find()
        .select_only()
        .column(inventory::Column::Status)
        .column_as(Expr::col(inventory::Column::Id).count(), "count")
        .group_by(inventory::Column::Status)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(InventoryStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status: status.as_str().to_string(),
            count: rows
                .iter()
                .find(|(s, _)| s == status.as_str())
                .map(|(_, count)| *count)
                .unwrap_or(0),
        })
        .collect())
}

pub async fn inventory_counts(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<Vec<StatusCount>>> {
    ensure_admin(user)?;
    let counts = counts_by_status(&state.orm).await?;
    Ok(ApiResponse::success("Inventory counts", counts, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redistribution_needs_a_partner_to_be_delivered() {
        assert_eq!(
            delivered_if_redistributed(InventoryStatus::Redistributed, Some(3)).as_deref(),
            Some("delivered")
        );
        assert_eq!(delivered_if_redistributed(InventoryStatus::Redistributed, None), None);
        assert_eq!(delivered_if_redistributed(InventoryStatus::Listed, Some(3)), None);
    }
}
