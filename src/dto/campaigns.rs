use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::blank_to_none;
use crate::models::Campaign;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CampaignRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(required(message = "An end date is required."))]
    pub end_date: Option<NaiveDate>,
}

impl CampaignRequest {
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: blank_to_none(self.description),
            end_date: self.end_date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CampaignList {
    pub items: Vec<Campaign>,
}
