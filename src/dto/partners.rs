use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::blank_to_none;
use crate::models::Partner;

/// Create and full-replace payload for a partner.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PartnerRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    pub logo_url: Option<String>,
    pub logo_hint: Option<String>,
}

impl PartnerRequest {
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: blank_to_none(self.description),
            logo_url: blank_to_none(self.logo_url),
            logo_hint: blank_to_none(self.logo_hint),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PartnerList {
    pub items: Vec<Partner>,
}
