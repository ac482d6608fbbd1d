pub mod auth;
pub mod campaigns;
pub mod chat;
pub mod dashboard;
pub mod donations;
pub mod ecommerce;
pub mod inventory;
pub mod locations;
pub mod logistics;
pub mod lookups;
pub mod partners;
pub mod pickups;

/// Trim a free-text form field, treating blank input as absent.
pub(crate) fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
