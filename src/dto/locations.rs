use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::blank_to_none;
use crate::models::Location;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LocationRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub hours: Option<String>,
}

impl LocationRequest {
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            hours: blank_to_none(self.hours),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationList {
    pub items: Vec<Location>,
}
