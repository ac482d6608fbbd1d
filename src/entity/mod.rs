pub mod accessory_types;
pub mod audit_logs;
pub mod campaigns;
pub mod donations;
pub mod ecommerce_integrations;
pub mod inventory;
pub mod locations;
pub mod partners;
pub mod pickups;
pub mod toy_conditions;
pub mod users;

pub use accessory_types::Entity as AccessoryTypes;
pub use audit_logs::Entity as AuditLogs;
pub use campaigns::Entity as Campaigns;
pub use donations::Entity as Donations;
pub use ecommerce_integrations::Entity as EcommerceIntegrations;
pub use inventory::Entity as Inventory;
pub use locations::Entity as Locations;
pub use partners::Entity as Partners;
pub use pickups::Entity as Pickups;
pub use toy_conditions::Entity as ToyConditions;
pub use users::Entity as Users;
