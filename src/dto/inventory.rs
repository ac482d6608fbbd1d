use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::blank_to_none;
use crate::models::{InventoryItem, InventoryStatus};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InventoryRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(required(message = "Please select a condition"))]
    pub condition_id: Option<i32>,
    #[validate(custom(function = "validate_inventory_status"))]
    pub status: String,
    #[validate(url(message = "Must be a valid URL"))]
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub redistributed_to_partner_id: Option<i32>,
}

impl InventoryRequest {
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: blank_to_none(self.description),
            condition_id: self.condition_id,
            status: self.status.trim().to_string(),
            image_url: blank_to_none(self.image_url),
            image_hint: blank_to_none(self.image_hint),
            redistributed_to_partner_id: self.redistributed_to_partner_id,
        }
    }
}

fn validate_inventory_status(status: &str) -> Result<(), ValidationError> {
    if status.parse::<InventoryStatus>().is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("status");
    err.message = Some("Please select a valid status".into());
    Err(err)
}

/// Query for the inventory list. Pagination fields sit inline so that
/// numeric query values deserialize without `serde(flatten)`.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct InventoryQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// One of received, sanitizing, listed, redistributed.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryList {
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: &str) -> InventoryRequest {
        InventoryRequest {
            name: " Wooden train ".into(),
            description: Some("  ".into()),
            condition_id: Some(1),
            status: status.into(),
            image_url: Some(String::new()),
            image_hint: None,
            redistributed_to_partner_id: None,
        }
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let req = request("received").normalize();
        assert_eq!(req.name, "Wooden train");
        assert!(req.description.is_none());
        assert!(req.image_url.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let errors = request("archived").normalize().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
    }
}
