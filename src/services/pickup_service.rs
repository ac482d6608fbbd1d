use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, LoaderTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    audit,
    db::OrmConn,
    dto::pickups::{
        PickupDetail, PickupDetailList, ScheduleOptions, ScheduledDays, SchedulePickupRequest,
        UpdatePickupStatusRequest,
    },
    entity::{AccessoryTypes, Locations, Partners, Pickups, ToyConditions, pickups},
    error::{AppError, AppResult},
    mail::{self, MailOutcome, PickupPlace, ScheduledPickupEmail},
    middleware::auth::{AuthUser, ensure_admin},
    models::{AccessoryType, Location, Partner, Pickup, PickupStatus, PickupType, ToyCondition},
    response::{ApiResponse, Meta},
    state::AppState,
};

const SAVE_FAILED: &str = "Could not save the appointment to the database. Please try again later.";

/// Validate a scheduling form against the field rules and the referenced
/// rows, then insert it. Only the field chosen by the pickup type is kept.
pub async fn create_pickup(
    conn: &OrmConn,
    form: SchedulePickupRequest,
) -> AppResult<pickups::Model> {
    let form = form.normalize();
    let pickup_type = form.check()?;

    let (Some(pickup_date), Some(toy_condition_id), Some(accessory_type_id)) =
        (form.pickup_date, form.toy_condition_id, form.accessory_type_id)
    else {
        return Err(AppError::BadRequest("Incomplete pickup form".into()));
    };

    if ToyConditions::find_by_id(toy_condition_id).one(conn).await?.is_none() {
        return Err(AppError::field("toy_condition_id", "Please select a toy condition."));
    }
    if AccessoryTypes::find_by_id(accessory_type_id)
        .one(conn)
        .await?
        .is_none()
    {
        return Err(AppError::field(
            "accessory_type_id",
            "Please select an accessory type.",
        ));
    }

    let (address, location_id, partner_id) = match pickup_type {
        PickupType::MyAddress => (form.address, None, None),
        PickupType::DropOff => {
            let location_id = form.location_id;
            if let Some(id) = location_id {
                if Locations::find_by_id(id).one(conn).await?.is_none() {
                    return Err(AppError::field("location_id", "Please select a drop-off location."));
                }
            }
            (None, location_id, None)
        }
        PickupType::Partner => {
            let partner_id = form.partner_id;
            if let Some(id) = partner_id {
                if Partners::find_by_id(id).one(conn).await?.is_none() {
                    return Err(AppError::field("partner_id", "Please select a partner."));
                }
            }
            (None, None, partner_id)
        }
    };

    let inserted = pickups::ActiveModel {
        id: NotSet,
        name: Set(form.name),
        email: Set(form.email),
        pickup_type: Set(pickup_type.as_str().to_string()),
        address: Set(address),
        location_id: Set(location_id),
        partner_id: Set(partner_id),
        pickup_date: Set(pickup_date),
        time_slot: Set(form.time_slot),
        status: Set(PickupStatus::Scheduled.as_str().to_string()),
        toy_condition_id: Set(toy_condition_id),
        accessory_type_id: Set(accessory_type_id),
        notes: Set(form.notes),
        collection_cost: Set(form.collection_cost),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await;

    inserted.map_err(|err| {
        tracing::error!(error = %err, "failed to save pickup");
        AppError::Internal(anyhow::anyhow!(SAVE_FAILED))
    })
}

async fn pickup_place(conn: &OrmConn, pickup: &pickups::Model) -> AppResult<Option<PickupPlace>> {
    if let Some(address) = &pickup.address {
        return Ok(Some(PickupPlace::Address(address.clone())));
    }
    if let Some(location) = pickup.find_related(Locations).one(conn).await? {
        return Ok(Some(PickupPlace::DropOff {
            name: location.name,
            address: location.address,
        }));
    }
    if let Some(partner) = pickup.find_related(Partners).one(conn).await? {
        return Ok(Some(PickupPlace::Partner { name: partner.name }));
    }
    Ok(None)
}

pub async fn schedule_pickup(
    state: &AppState,
    user: &AuthUser,
    payload: SchedulePickupRequest,
) -> AppResult<ApiResponse<Pickup>> {
    let pickup = create_pickup(&state.orm, payload).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "pickup_schedule",
        "pickups",
        serde_json::json!({ "pickup_id": pickup.id }),
    )
    .await;

    let message = if state.mailer.is_enabled() {
        let place = pickup_place(&state.orm, &pickup).await?;
        let email = mail::pickup_scheduled(&ScheduledPickupEmail {
            name: &pickup.name,
            email: &pickup.email,
            date: pickup.pickup_date,
            time_slot: &pickup.time_slot,
            place,
            notes: pickup.notes.as_deref(),
        });
        match state.mailer.send(email).await {
            Ok(MailOutcome::Sent) => "Pickup scheduled and email sent successfully.",
            Ok(MailOutcome::Skipped) => "Pickup scheduled successfully.",
            Err(err) => {
                tracing::warn!(error = %err, pickup_id = pickup.id, "confirmation email failed");
                "Pickup scheduled, but failed to send confirmation email."
            }
        }
    } else {
        "Pickup scheduled successfully."
    };

    Ok(ApiResponse::success(
        message,
        Pickup::from(pickup),
        Some(Meta::empty()),
    ))
}

pub async fn schedule_options(state: &AppState) -> AppResult<ApiResponse<ScheduleOptions>> {
    let conn = &state.orm;
    let toy_conditions = ToyConditions::find()
        .order_by_asc(crate::entity::toy_conditions::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(ToyCondition::from)
        .collect();
    let accessory_types = AccessoryTypes::find()
        .order_by_asc(crate::entity::accessory_types::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(AccessoryType::from)
        .collect();
    let locations = Locations::find()
        .order_by_asc(crate::entity::locations::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Location::from)
        .collect();
    let partners = Partners::find()
        .order_by_asc(crate::entity::partners::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Partner::from)
        .collect();

    Ok(ApiResponse::success(
        "Schedule options",
        ScheduleOptions {
            toy_conditions,
            accessory_types,
            locations,
            partners,
        },
        None,
    ))
}

pub async fn scheduled_days(state: &AppState) -> AppResult<ApiResponse<ScheduledDays>> {
    let dates: Vec<NaiveDate> = Pickups::find()
        .select_only()
        .column(pickups::Column::PickupDate)
        .distinct()
        .order_by_asc(pickups::Column::PickupDate)
        .into_tuple()
        .all(&state.orm)
        .await?;
    Ok(ApiResponse::success("Scheduled days", ScheduledDays { dates }, None))
}

/// Attach the location and partner of each pickup, preserving order.
pub async fn with_details(
    conn: &OrmConn,
    rows: Vec<pickups::Model>,
) -> AppResult<Vec<PickupDetail>> {
    let locations = rows.load_one(Locations, conn).await?;
    let partners = rows.load_one(Partners, conn).await?;

    Ok(rows
        .into_iter()
        .zip(locations)
        .zip(partners)
        .map(|((pickup, location), partner)| PickupDetail {
            pickup: Pickup::from(pickup),
            location: location.map(Location::from),
            partner: partner.map(Partner::from),
        })
        .collect())
}

/// Admins see every pickup on `date`; other users only the ones booked
/// under their own email.
pub async fn list_for_date(
    state: &AppState,
    user: &AuthUser,
    date: NaiveDate,
) -> AppResult<ApiResponse<PickupDetailList>> {
    let mut finder = Pickups::find().filter(pickups::Column::PickupDate.eq(date));
    if !user.is_admin() {
        finder = finder.filter(pickups::Column::Email.eq(user.email.to_lowercase()));
    }
    let rows = finder
        .order_by_asc(pickups::Column::TimeSlot)
        .order_by_asc(pickups::Column::Id)
        .all(&state.orm)
        .await?;

    let items = with_details(&state.orm, rows).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Pickups", PickupDetailList { items }, Some(meta)))
}

/// Direct write of the new status. Marking a pickup completed emails the
/// donor; a failed email does not undo the update.
pub async fn update_pickup_status(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdatePickupStatusRequest,
) -> AppResult<ApiResponse<Pickup>> {
    ensure_admin(user)?;
    let status = payload
        .status
        .trim()
        .parse::<PickupStatus>()
        .map_err(|_| AppError::field("status", "Invalid pickup status"))?;

    let existing = Pickups::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: pickups::ActiveModel = existing.into();
    active.status = Set(status.as_str().to_string());
    let pickup = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "pickup_status_update",
        "pickups",
        serde_json::json!({ "pickup_id": id, "status": status.as_str() }),
    )
    .await;

    if status == PickupStatus::Completed {
        let email = mail::pickup_completed(&pickup.name, &pickup.email);
        if let Err(err) = state.mailer.send(email).await {
            tracing::warn!(error = %err, pickup_id = id, "completion email failed");
        }
    }

    Ok(ApiResponse::success(
        format!("Pickup status updated to {status}."),
        Pickup::from(pickup),
        Some(Meta::empty()),
    ))
}

pub async fn delete_pickup(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let pickup = Pickups::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if !user.is_admin() && !pickup.email.eq_ignore_ascii_case(&user.email) {
        return Err(AppError::Forbidden);
    }

    pickup.delete(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "pickup_delete",
        "pickups",
        serde_json::json!({ "pickup_id": id }),
    )
    .await;

    Ok(ApiResponse::done("Pickup successfully deleted."))
}
