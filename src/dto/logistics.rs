use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{InventoryItem, Partner};

#[derive(Debug, Serialize, ToSchema)]
pub struct RedistributedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub partner: Option<Partner>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RedistributedList {
    pub items: Vec<RedistributedItem>,
}
