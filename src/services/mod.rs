pub mod accessory_type_service;
pub mod assistant_service;
pub mod auth_service;
pub mod campaign_service;
pub mod dashboard_service;
pub mod donation_service;
pub mod ecommerce_service;
pub mod inventory_service;
pub mod location_service;
pub mod logistics_service;
pub mod partner_service;
pub mod pickup_service;
pub mod toy_condition_service;
pub mod workflow_service;
