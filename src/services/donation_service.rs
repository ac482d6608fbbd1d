use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm::ActiveValue::NotSet;
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit,
    db::OrmConn,
    dto::donations::{DonationList, DonationWithItem, RecordDonationRequest},
    entity::{Donations, Inventory, Users, donations},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Donation, InventoryItem},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_my_donations(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<DonationList>> {
    let items: Vec<DonationWithItem> = Donations::find()
        .filter(donations::Column::UserId.eq(user.user_id))
        .find_also_related(Inventory)
        .order_by_desc(donations::Column::DonatedAt)
        .order_by_desc(donations::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(donation, item)| DonationWithItem {
            donation: Donation::from(donation),
            inventory: item.map(InventoryItem::from),
        })
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Donations", DonationList { items }, Some(meta)))
}

pub async fn count_for_user(conn: &OrmConn, user_id: Uuid) -> AppResult<i64> {
    let count = Donations::find()
        .filter(donations::Column::UserId.eq(user_id))
        .count(conn)
        .await?;
    Ok(count as i64)
}

/// Each inventory item can be credited to one donor only.
pub async fn record_donation(
    state: &AppState,
    user: &AuthUser,
    payload: RecordDonationRequest,
) -> AppResult<ApiResponse<Donation>> {
    ensure_admin(user)?;
    payload.validate()?;
    let (Some(donor_id), Some(inventory_id)) = (payload.user_id, payload.inventory_id) else {
        return Err(AppError::BadRequest("Donor and inventory item are required".into()));
    };

    if Users::find_by_id(donor_id).one(&state.orm).await?.is_none() {
        return Err(AppError::field("user_id", "User does not exist"));
    }
    if Inventory::find_by_id(inventory_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::field("inventory_id", "Inventory item does not exist"));
    }

    let already = Donations::find()
        .filter(donations::Column::InventoryId.eq(inventory_id))
        .one(&state.orm)
        .await?;
    if already.is_some() {
        return Err(AppError::Conflict(
            "A donation is already recorded for this item".into(),
        ));
    }

    let donation = donations::ActiveModel {
        id: NotSet,
        user_id: Set(donor_id),
        inventory_id: Set(inventory_id),
        donated_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.user_id,
        "donation_record",
        "donations",
        serde_json::json!({ "donation_id": donation.id, "inventory_id": inventory_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Donation recorded",
        Donation::from(donation),
        Some(Meta::empty()),
    ))
}
