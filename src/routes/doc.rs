use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        campaigns::{CampaignList, CampaignRequest},
        chat::{ChatReply, ChatRequest, ChatTurn},
        dashboard::{DashboardStats, ImpactReport, ImpactStats, LocationDonationCount, LocationDonationList},
        donations::{DonationList, DonationWithItem, RecordDonationRequest},
        ecommerce::{IntegrationList, IntegrationRequest, IntegrationUpdateRequest},
        inventory::{InventoryList, InventoryRequest, StatusCount},
        locations::{LocationList, LocationRequest},
        logistics::{RedistributedItem, RedistributedList},
        lookups::{AccessoryTypeList, LookupRequest, ToyConditionList},
        partners::{PartnerList, PartnerRequest},
        pickups::{
            PickupDetail, PickupDetailList, ScheduleOptions, ScheduledDays, SchedulePickupRequest,
            UpdatePickupStatusRequest,
        },
    },
    models::{
        AccessoryType, Campaign, Donation, EcommerceIntegration, InventoryItem, InventoryStatus,
        Location, LogisticsStatus, Partner, Pickup, PickupStatus, PickupType, Role, ToyCondition,
        User,
    },
    response::{ApiResponse, Meta},
    routes::{
        accessory_types, auth, campaigns, chat, dashboard, donations, health, inventory, locations,
        logistics, params, partners, pickups, toy_conditions, workflow,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        partners::list_partners,
        partners::get_partner,
        partners::create_partner,
        partners::update_partner,
        partners::delete_partner,
        locations::list_locations,
        locations::get_location,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        accessory_types::list_accessory_types,
        accessory_types::get_accessory_type,
        accessory_types::create_accessory_type,
        accessory_types::update_accessory_type,
        accessory_types::delete_accessory_type,
        toy_conditions::list_toy_conditions,
        toy_conditions::get_toy_condition,
        toy_conditions::create_toy_condition,
        toy_conditions::update_toy_condition,
        toy_conditions::delete_toy_condition,
        inventory::list_inventory,
        inventory::inventory_counts,
        inventory::get_inventory_item,
        inventory::create_inventory_item,
        inventory::update_inventory_item,
        inventory::delete_inventory_item,
        donations::list_my_donations,
        donations::record_donation,
        pickups::schedule_pickup,
        pickups::schedule_options,
        pickups::scheduled_days,
        pickups::list_for_date,
        pickups::update_pickup_status,
        pickups::delete_pickup,
        workflow::list_workflow,
        logistics::list_redistributed,
        logistics::request_recollection,
        logistics::mark_recollected,
        logistics::list_integrations,
        logistics::create_integration,
        logistics::update_integration,
        logistics::delete_integration,
        campaigns::list_campaigns,
        campaigns::get_campaign,
        campaigns::create_campaign,
        campaigns::update_campaign,
        campaigns::delete_campaign,
        dashboard::stats,
        dashboard::donations_by_location,
        dashboard::impact_report,
        chat::chat
    ),
    components(
        schemas(
            Role,
            InventoryStatus,
            LogisticsStatus,
            PickupType,
            PickupStatus,
            User,
            Partner,
            Location,
            AccessoryType,
            ToyCondition,
            InventoryItem,
            Donation,
            Pickup,
            Campaign,
            EcommerceIntegration,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            PartnerRequest,
            PartnerList,
            LocationRequest,
            LocationList,
            LookupRequest,
            AccessoryTypeList,
            ToyConditionList,
            InventoryRequest,
            InventoryList,
            StatusCount,
            RecordDonationRequest,
            DonationWithItem,
            DonationList,
            SchedulePickupRequest,
            UpdatePickupStatusRequest,
            PickupDetail,
            PickupDetailList,
            ScheduleOptions,
            ScheduledDays,
            RedistributedItem,
            RedistributedList,
            IntegrationRequest,
            IntegrationUpdateRequest,
            IntegrationList,
            CampaignRequest,
            CampaignList,
            DashboardStats,
            LocationDonationCount,
            LocationDonationList,
            ImpactStats,
            ImpactReport,
            ChatTurn,
            ChatRequest,
            ChatReply,
            params::Pagination,
            Meta,
            ApiResponse<InventoryItem>,
            ApiResponse<InventoryList>,
            ApiResponse<PickupDetailList>,
            ApiResponse<Pickup>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration, login and session endpoints"),
        (name = "Partners", description = "Partner organization endpoints"),
        (name = "Locations", description = "Drop-off location endpoints"),
        (name = "Reference Data", description = "Toy condition and accessory type endpoints"),
        (name = "Inventory", description = "Donated item inventory endpoints"),
        (name = "Donations", description = "Donation history endpoints"),
        (name = "Pickups", description = "Pickup scheduling endpoints"),
        (name = "Workflow", description = "Pickup workflow endpoints"),
        (name = "Logistics", description = "Redistribution logistics and e-commerce endpoints"),
        (name = "Campaigns", description = "Campaign endpoints"),
        (name = "Dashboard", description = "Dashboard and impact report endpoints"),
        (name = "Chat", description = "Assistant chat endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_area() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/auth/login",
            "/api/pickups",
            "/api/inventory/{id}",
            "/api/logistics/inventory/{id}/recollection",
            "/api/chat",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
