use axum::Router;

use crate::state::AppState;

pub mod accessory_types;
pub mod auth;
pub mod campaigns;
pub mod chat;
pub mod dashboard;
pub mod doc;
pub mod donations;
pub mod health;
pub mod inventory;
pub mod locations;
pub mod logistics;
pub mod params;
pub mod partners;
pub mod pickups;
pub mod toy_conditions;
pub mod workflow;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/partners", partners::router())
        .nest("/locations", locations::router())
        .nest("/accessory-types", accessory_types::router())
        .nest("/toy-conditions", toy_conditions::router())
        .nest("/inventory", inventory::router())
        .nest("/donations", donations::router())
        .nest("/pickups", pickups::router())
        .nest("/workflow", workflow::router())
        .nest("/logistics", logistics::router())
        .nest("/campaigns", campaigns::router())
        .nest("/dashboard", dashboard::router())
        .nest("/chat", chat::router())
}
