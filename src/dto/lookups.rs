use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{AccessoryType, ToyCondition};

/// Payload shared by the name-only lookup tables (accessory types, toy conditions).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LookupRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl LookupRequest {
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessoryTypeList {
    pub items: Vec<AccessoryType>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToyConditionList {
    pub items: Vec<ToyCondition>,
}
