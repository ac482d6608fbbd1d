use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_donations: i64,
    pub total_users: i64,
    pub total_inventory: i64,
    pub redistributed: i64,
    /// Percentage of inventory that reached a partner, 0 when empty.
    pub redistribution_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationDonationCount {
    pub location_id: i32,
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationDonationList {
    pub items: Vec<LocationDonationCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImpactStats {
    pub toys_redistributed: i64,
    pub environmental_impact: String,
    pub smiles_created: i64,
    /// Only present when the caller is a regular user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_donations: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImpactReport {
    pub report: String,
    /// False when the narrative came from the built-in template.
    pub generated: bool,
    pub stats: ImpactStats,
}
