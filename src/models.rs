use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{
    accessory_types, campaigns, donations, ecommerce_integrations, inventory, locations, partners,
    pickups, toy_conditions, users,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(()),
        }
    }
}

/// Warehouse pipeline stage of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    Received,
    Sanitizing,
    Listed,
    Redistributed,
}

impl InventoryStatus {
    pub const ALL: [InventoryStatus; 4] = [
        InventoryStatus::Received,
        InventoryStatus::Sanitizing,
        InventoryStatus::Listed,
        InventoryStatus::Redistributed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::Received => "received",
            InventoryStatus::Sanitizing => "sanitizing",
            InventoryStatus::Listed => "listed",
            InventoryStatus::Redistributed => "redistributed",
        }
    }
}

impl FromStr for InventoryStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InventoryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

/// Sub-state of a redistributed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsStatus {
    Delivered,
    RecollectionRequested,
    Recollected,
}

impl LogisticsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogisticsStatus::Delivered => "delivered",
            LogisticsStatus::RecollectionRequested => "recollection_requested",
            LogisticsStatus::Recollected => "recollected",
        }
    }
}

impl FromStr for LogisticsStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivered" => Ok(LogisticsStatus::Delivered),
            "recollection_requested" => Ok(LogisticsStatus::RecollectionRequested),
            "recollected" => Ok(LogisticsStatus::Recollected),
            _ => Err(()),
        }
    }
}

/// Where the donor hands the toys over; decides which of address, location
/// or partner a pickup carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PickupType {
    MyAddress,
    DropOff,
    Partner,
}

impl PickupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupType::MyAddress => "my-address",
            PickupType::DropOff => "drop-off",
            PickupType::Partner => "partner",
        }
    }
}

impl FromStr for PickupType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "my-address" => Ok(PickupType::MyAddress),
            "drop-off" => Ok(PickupType::DropOff),
            "partner" => Ok(PickupType::Partner),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl PickupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupStatus::Scheduled => "scheduled",
            PickupStatus::Completed => "completed",
            PickupStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for PickupStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(PickupStatus::Scheduled),
            "completed" => Ok(PickupStatus::Completed),
            "cancelled" => Ok(PickupStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            avatar: model.avatar,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub logo_hint: Option<String>,
}

impl From<partners::Model> for Partner {
    fn from(model: partners::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            logo_url: model.logo_url,
            logo_hint: model.logo_hint,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub hours: Option<String>,
}

impl From<locations::Model> for Location {
    fn from(model: locations::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            hours: model.hours,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessoryType {
    pub id: i32,
    pub name: String,
}

impl From<accessory_types::Model> for AccessoryType {
    fn from(model: accessory_types::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToyCondition {
    pub id: i32,
    pub name: String,
}

impl From<toy_conditions::Model> for ToyCondition {
    fn from(model: toy_conditions::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub condition_id: i32,
    pub condition_name: Option<String>,
    pub status: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub redistributed_to_partner_id: Option<i32>,
    pub logistics_status: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn with_condition(model: inventory::Model, condition: Option<toy_conditions::Model>) -> Self {
        let mut item = Self::from(model);
        item.condition_name = condition.map(|c| c.name);
        item
    }
}

impl From<inventory::Model> for InventoryItem {
    fn from(model: inventory::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            condition_id: model.condition_id,
            condition_name: None,
            status: model.status,
            image_url: model.image_url,
            image_hint: model.image_hint,
            redistributed_to_partner_id: model.redistributed_to_partner_id,
            logistics_status: model.logistics_status,
            received_at: model.received_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Donation {
    pub id: i32,
    pub user_id: Uuid,
    pub inventory_id: i32,
    pub donated_at: DateTime<Utc>,
}

impl From<donations::Model> for Donation {
    fn from(model: donations::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            inventory_id: model.inventory_id,
            donated_at: model.donated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pickup {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub pickup_type: String,
    pub address: Option<String>,
    pub location_id: Option<i32>,
    pub partner_id: Option<i32>,
    pub pickup_date: NaiveDate,
    pub time_slot: String,
    pub status: String,
    pub toy_condition_id: i32,
    pub accessory_type_id: i32,
    pub notes: Option<String>,
    pub collection_cost: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<pickups::Model> for Pickup {
    fn from(model: pickups::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            pickup_type: model.pickup_type,
            address: model.address,
            location_id: model.location_id,
            partner_id: model.partner_id,
            pickup_date: model.pickup_date,
            time_slot: model.time_slot,
            status: model.status,
            toy_condition_id: model.toy_condition_id,
            accessory_type_id: model.accessory_type_id,
            notes: model.notes,
            collection_cost: model.collection_cost,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<campaigns::Model> for Campaign {
    fn from(model: campaigns::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            end_date: model.end_date,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// Stored platform credentials. The secret never leaves the service unmasked.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EcommerceIntegration {
    pub id: i32,
    pub platform: String,
    pub api_key: String,
    pub api_secret: String,
    pub created_at: DateTime<Utc>,
}

impl From<ecommerce_integrations::Model> for EcommerceIntegration {
    fn from(model: ecommerce_integrations::Model) -> Self {
        Self {
            id: model.id,
            platform: model.platform,
            api_key: model.api_key,
            api_secret: mask_secret(&model.api_secret),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// Replace all but the last four characters with `*`.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let visible = chars.len().saturating_sub(4);
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { *c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_secret_keeps_last_four() {
        assert_eq!(mask_secret("sk_live_abcdef1234"), "**************1234");
        assert_eq!(mask_secret("abc"), "abc");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn pickup_type_uses_kebab_case() {
        assert_eq!("drop-off".parse::<PickupType>(), Ok(PickupType::DropOff));
        assert_eq!(PickupType::MyAddress.as_str(), "my-address");
        assert!("drop_off".parse::<PickupType>().is_err());
        let json = serde_json::to_string(&PickupType::MyAddress).unwrap();
        assert_eq!(json, "\"my-address\"");
    }

    #[test]
    fn inventory_status_rejects_unknown_values() {
        for status in InventoryStatus::ALL {
            assert_eq!(status.as_str().parse::<InventoryStatus>(), Ok(status));
        }
        assert!("archived".parse::<InventoryStatus>().is_err());
    }

    #[test]
    fn logistics_status_parses_snake_case() {
        assert_eq!(
            "recollection_requested".parse::<LogisticsStatus>(),
            Ok(LogisticsStatus::RecollectionRequested)
        );
        assert!("recollection-requested".parse::<LogisticsStatus>().is_err());
    }
}
