use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    audit,
    dto::logistics::{RedistributedItem, RedistributedList},
    entity::{Inventory, Partners, inventory},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{InventoryItem, InventoryStatus, LogisticsStatus, Partner},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_redistributed(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<RedistributedList>> {
    ensure_admin(user)?;
    let items: Vec<RedistributedItem> = Inventory::find()
        .filter(inventory::Column::Status.eq(InventoryStatus::Redistributed.as_str()))
        .filter(inventory::Column::RedistributedToPartnerId.is_not_null())
        .find_also_related(Partners)
        .order_by_desc(inventory::Column::ReceivedAt)
        .order_by_desc(inventory::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(item, partner)| RedistributedItem {
            item: InventoryItem::from(item),
            partner: partner.map(Partner::from),
        })
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Redistributed inventory",
        RedistributedList { items },
        Some(meta),
    ))
}

/// Whether an item in logistics state `current` may move to `next`.
fn can_transition(current: Option<LogisticsStatus>, next: LogisticsStatus) -> bool {
    matches!(
        (current, next),
        (
            None | Some(LogisticsStatus::Delivered),
            LogisticsStatus::RecollectionRequested
        ) | (
            Some(LogisticsStatus::RecollectionRequested),
            LogisticsStatus::Recollected
        )
    )
}

async fn transition(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    next: LogisticsStatus,
) -> AppResult<InventoryItem> {
    ensure_admin(user)?;
    let item = Inventory::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if item.status != InventoryStatus::Redistributed.as_str()
        || item.redistributed_to_partner_id.is_none()
    {
        return Err(AppError::Conflict(
            "Only items redistributed to a partner can be recollected".into(),
        ));
    }

    let current = match item.logistics_status.as_deref() {
        None => None,
        Some(raw) => Some(raw.parse::<LogisticsStatus>().map_err(|_| {
            AppError::Internal(anyhow::anyhow!("unknown logistics status {raw:?}"))
        })?),
    };
    if !can_transition(current, next) {
        return Err(AppError::Conflict(format!(
            "Cannot move item from {} to {}",
            current.map(|s| s.as_str()).unwrap_or("unset"),
            next.as_str()
        )));
    }

    let mut active: inventory::ActiveModel = item.into();
    active.logistics_status = Set(Some(next.as_str().to_string()));
    let item = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "logistics_update",
        "inventory",
        serde_json::json!({ "inventory_id": id, "logistics_status": next.as_str() }),
    )
    .await;

    Ok(InventoryItem::from(item))
}

pub async fn request_recollection(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<InventoryItem>> {
    let item = transition(state, user, id, LogisticsStatus::RecollectionRequested).await?;
    tracing::info!(inventory_id = id, "recollection requested");
    Ok(ApiResponse::success(
        "Recollection has been requested.",
        item,
        Some(Meta::empty()),
    ))
}

pub async fn mark_recollected(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<InventoryItem>> {
    let item = transition(state, user, id, LogisticsStatus::Recollected).await?;
    Ok(ApiResponse::success(
        "Item marked as recollected.",
        item,
        Some(Meta::empty()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogisticsStatus::*;

    #[test]
    fn recollection_follows_delivery() {
        assert!(can_transition(None, RecollectionRequested));
        assert!(can_transition(Some(Delivered), RecollectionRequested));
        assert!(can_transition(Some(RecollectionRequested), Recollected));

        assert!(!can_transition(Some(Recollected), RecollectionRequested));
        assert!(!can_transition(Some(Delivered), Recollected));
        assert!(!can_transition(None, Recollected));
    }
}
