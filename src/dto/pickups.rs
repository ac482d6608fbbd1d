use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use super::blank_to_none;
use crate::models::{AccessoryType, Location, Partner, Pickup, PickupType, ToyCondition};

pub const MIN_ADDRESS_LEN: usize = 10;

/// Scheduling form. Required fields are optional here so a missing value
/// surfaces as a field error instead of a rejected body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SchedulePickupRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
    pub pickup_type: String,
    pub address: Option<String>,
    pub location_id: Option<i32>,
    pub partner_id: Option<i32>,
    #[validate(required(message = "A pickup date is required."))]
    pub pickup_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Please select a time slot."))]
    pub time_slot: String,
    #[validate(required(message = "Please select a toy condition."))]
    pub toy_condition_id: Option<i32>,
    #[validate(required(message = "Please select an accessory type."))]
    pub accessory_type_id: Option<i32>,
    pub notes: Option<String>,
    #[validate(range(min = 0.0, message = "Collection cost cannot be negative."))]
    pub collection_cost: Option<f64>,
}

fn field_error(errors: &mut ValidationErrors, field: &'static str, message: &'static str) {
    let mut err = ValidationError::new(field);
    err.message = Some(message.into());
    errors.add(field, err);
}

impl SchedulePickupRequest {
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            pickup_type: self.pickup_type.trim().to_string(),
            address: blank_to_none(self.address),
            time_slot: self.time_slot.trim().to_string(),
            notes: blank_to_none(self.notes),
            ..self
        }
    }

    /// Field rules plus the rules that depend on the pickup type. Returns
    /// the parsed pickup type when everything holds.
    pub fn check(&self) -> Result<PickupType, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let pickup_type = self.pickup_type.parse::<PickupType>().ok();
        match pickup_type {
            None => field_error(&mut errors, "pickup_type", "Please select a pickup type."),
            Some(PickupType::MyAddress) => {
                let long_enough = self
                    .address
                    .as_deref()
                    .is_some_and(|a| a.chars().count() >= MIN_ADDRESS_LEN);
                if !long_enough {
                    field_error(&mut errors, "address", "Please enter a valid address.");
                }
            }
            Some(PickupType::DropOff) => {
                if self.location_id.is_none() {
                    field_error(&mut errors, "location_id", "Please select a drop-off location.");
                }
            }
            Some(PickupType::Partner) => {
                if self.partner_id.is_none() {
                    field_error(&mut errors, "partner_id", "Please select a partner.");
                }
            }
        }

        match pickup_type {
            Some(pickup_type) if errors.field_errors().is_empty() => Ok(pickup_type),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePickupStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PickupDateQuery {
    pub date: NaiveDate,
}

/// Workflow filters; every given filter must match.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct WorkflowQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub date: Option<NaiveDate>,
    pub partner_id: Option<i32>,
    pub location_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PickupDetail {
    #[serde(flatten)]
    pub pickup: Pickup,
    pub location: Option<Location>,
    pub partner: Option<Partner>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PickupDetailList {
    pub items: Vec<PickupDetail>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleOptions {
    pub toy_conditions: Vec<ToyCondition>,
    pub accessory_types: Vec<AccessoryType>,
    pub locations: Vec<Location>,
    pub partners: Vec<Partner>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduledDays {
    pub dates: Vec<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pickup_type: &str) -> SchedulePickupRequest {
        SchedulePickupRequest {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            pickup_type: pickup_type.into(),
            address: None,
            location_id: None,
            partner_id: None,
            pickup_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            time_slot: "10:00 - 12:00".into(),
            toy_condition_id: Some(1),
            accessory_type_id: Some(1),
            notes: None,
            collection_cost: None,
        }
    }

    fn fields(errors: &ValidationErrors) -> Vec<String> {
        let mut keys: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|k| k.to_string())
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn drop_off_requires_location() {
        let errors = form("drop-off").check().unwrap_err();
        assert_eq!(fields(&errors), vec!["location_id"]);

        let mut ok = form("drop-off");
        ok.location_id = Some(2);
        assert_eq!(ok.check().unwrap(), PickupType::DropOff);
    }

    #[test]
    fn my_address_requires_ten_characters() {
        let mut short = form("my-address");
        short.address = Some("1 Elm St".into());
        assert_eq!(fields(&short.check().unwrap_err()), vec!["address"]);

        let mut long = form("my-address");
        long.address = Some("12 Elm Street, Springfield".into());
        assert!(long.check().is_ok());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let mut bad = form("teleport");
        bad.name = "D".into();
        bad.email = "not-an-email".into();
        bad.pickup_date = None;
        bad.time_slot = String::new();
        bad.toy_condition_id = None;

        let errors = bad.check().unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["email", "name", "pickup_date", "pickup_type", "time_slot", "toy_condition_id"]
        );
    }

    #[test]
    fn normalize_drops_blank_address() {
        let mut req = form("partner");
        req.address = Some("   ".into());
        req.notes = Some(" leave at door ".into());
        let req = req.normalize();
        assert!(req.address.is_none());
        assert_eq!(req.notes.as_deref(), Some("leave at door"));
    }
}
