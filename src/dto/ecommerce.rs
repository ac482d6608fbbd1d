use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::blank_to_none;
use crate::models::EcommerceIntegration;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IntegrationRequest {
    #[validate(length(min = 1, message = "Platform is required"))]
    pub platform: String,
    #[validate(length(min = 1, message = "API key is required"))]
    pub api_key: String,
    #[validate(length(min = 1, message = "API secret is required"))]
    pub api_secret: String,
}

impl IntegrationRequest {
    pub fn normalize(self) -> Self {
        Self {
            platform: self.platform.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
            api_secret: self.api_secret.trim().to_string(),
        }
    }
}

/// Update payload. Responses only ever show a masked secret, so a missing
/// or blank `api_secret` keeps the stored one.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IntegrationUpdateRequest {
    #[validate(length(min = 1, message = "Platform is required"))]
    pub platform: String,
    #[validate(length(min = 1, message = "API key is required"))]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl IntegrationUpdateRequest {
    pub fn normalize(self) -> Self {
        Self {
            platform: self.platform.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
            api_secret: blank_to_none(self.api_secret),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IntegrationList {
    pub items: Vec<EcommerceIntegration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_secret_is_valid() {
        let req: IntegrationUpdateRequest =
            serde_json::from_str(r#"{"platform":" Etsy ","api_key":"key-9"}"#).unwrap();
        let req = req.normalize();
        assert_eq!(req.platform, "Etsy");
        assert!(req.api_secret.is_none());
        assert!(req.validate().is_ok());

        let blank = IntegrationUpdateRequest {
            platform: "Etsy".into(),
            api_key: "key-9".into(),
            api_secret: Some("   ".into()),
        };
        assert!(blank.normalize().api_secret.is_none());
    }
}
