use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Donation, InventoryItem};

/// Links an inventory item to the user who donated it.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordDonationRequest {
    #[validate(required(message = "A donor is required"))]
    pub user_id: Option<Uuid>,
    #[validate(required(message = "An inventory item is required"))]
    pub inventory_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DonationWithItem {
    #[serde(flatten)]
    pub donation: Donation,
    pub inventory: Option<InventoryItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DonationList {
    pub items: Vec<DonationWithItem>,
}
