use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use sea_orm::sea_query::Expr;

use crate::{
    db::OrmConn,
    dto::dashboard::{
        DashboardStats, ImpactReport, ImpactStats, LocationDonationCount, LocationDonationList,
    },
    entity::{Donations, Inventory, Locations, Pickups, Users, inventory, locations, pickups},
    error::AppResult,
    llm::ChatMessage,
    middleware::auth::{AuthUser, ensure_admin},
    models::{InventoryStatus, Role},
    response::{ApiResponse, Meta},
    services::donation_service,
    state::AppState,
};

pub const ENVIRONMENTAL_IMPACT: &str = "15 tons of plastic waste diverted from landfills";

async fn redistributed_count(conn: &OrmConn) -> AppResult<i64> {
    let count = Inventory::find()
        .filter(inventory::Column::Status.eq(InventoryStatus::Redistributed.as_str()))
        .count(conn)
        .await?;
    Ok(count as i64)
}

fn percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((part as f64 / total as f64) * 1000.0).round() / 10.0
}

pub async fn stats(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<DashboardStats>> {
    ensure_admin(user)?;
    let conn = &state.orm;
    let total_donations = Donations::find().count(conn).await? as i64;
    let total_users = Users::find().count(conn).await? as i64;
    let total_inventory = Inventory::find().count(conn).await? as i64;
    let redistributed = redistributed_count(conn).await?;

    let data = DashboardStats {
        total_donations,
        total_users,
        total_inventory,
        redistributed,
        redistribution_rate: percentage(redistributed, total_inventory),
    };
    Ok(ApiResponse::success("Dashboard stats", data, Some(Meta::empty())))
}

/// Pickups per drop-off location, zero for locations nobody used yet.
pub async fn donations_by_location(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<LocationDonationList>> {
    ensure_admin(user)?;
    let conn = &state.orm;
    let counts: Vec<(Option<i32>, i64)> = Pickups::find()
        .select_only()
        .column(pickups::Column::LocationId)
        .column_as(Expr::col(pickups::Column::Id).count(), "count")
        .filter(pickups::Column::LocationId.is_not_null())
        .group_by(pickups::Column::LocationId)
        .into_tuple()
        .all(conn)
        .await?;

    let items: Vec<LocationDonationCount> = Locations::find()
        .order_by_asc(locations::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(|location| LocationDonationCount {
            count: counts
                .iter()
                .find(|(id, _)| *id == Some(location.id))
                .map(|(_, count)| *count)
                .unwrap_or(0),
            location_id: location.id,
            name: location.name,
        })
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Donations by location",
        LocationDonationList { items },
        Some(meta),
    ))
}

fn report_prompt(user: &AuthUser, stats: &ImpactStats) -> String {
    let mut prompt = format!(
        "You are an impact report generator for ToyCycle, which collects, sanitizes, and \
         redistributes unused kids' toys and accessories.\n\n\
         Generate a personalized impact report for {name} based on the following information:\n\n\
         Total Toys Redistributed: {toys}\n\
         Environmental Impact: {env}\n\
         Smiles Created: {smiles}\n",
        name = user.name,
        toys = stats.toys_redistributed,
        env = stats.environmental_impact,
        smiles = stats.smiles_created,
    );
    if let Some(donations) = stats.user_donations {
        prompt.push_str(&format!("User Donations: {donations}\n"));
    }
    prompt.push_str(
        "\nHighlight the most impactful data points and present them in a positive, engaging \
         manner. Keep the report concise and quantify the impact. If the user has donations, \
         thank them specifically for their contributions.",
    );
    prompt
}

/// Deterministic report used when no model is configured or the call fails.
pub fn template_report(stats: &ImpactStats) -> String {
    let mut report = format!(
        "Thanks to ToyCycle, we've redistributed {} toys, reducing landfill waste and creating {} smiles! \
         Our environmental impact includes {}.",
        stats.toys_redistributed, stats.smiles_created, stats.environmental_impact
    );
    if let Some(donations) = stats.user_donations.filter(|d| *d > 0) {
        report.push_str(&format!(
            " Thank you for your {donations} donations which contributed to this impact."
        ));
    }
    report
}

pub async fn impact_report(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ImpactReport>> {
    let toys_redistributed = redistributed_count(&state.orm).await?;
    let user_donations = if user.role == Role::User.as_str() {
        Some(donation_service::count_for_user(&state.orm, user.user_id).await?)
    } else {
        None
    };
    let stats = ImpactStats {
        toys_redistributed,
        environmental_impact: ENVIRONMENTAL_IMPACT.to_string(),
        smiles_created: toys_redistributed,
        user_donations,
    };

    let generated = match &state.llm {
        Some(model) => {
            let messages = [ChatMessage::user(report_prompt(user, &stats))];
            match model.complete(&messages, &[]).await {
                Ok(reply) => reply.content.filter(|text| !text.trim().is_empty()),
                Err(err) => {
                    tracing::warn!(error = %err, "impact report generation failed");
                    None
                }
            }
        }
        None => None,
    };

    let data = match generated {
        Some(report) => ImpactReport {
            report,
            generated: true,
            stats,
        },
        None => ImpactReport {
            report: template_report(&stats),
            generated: false,
            stats,
        },
    };
    Ok(ApiResponse::success("Impact report", data, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_rounded_percentage() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(4, 4), 100.0);
    }

    #[test]
    fn template_thanks_donors_only() {
        let mut stats = ImpactStats {
            toys_redistributed: 12,
            environmental_impact: ENVIRONMENTAL_IMPACT.to_string(),
            smiles_created: 12,
            user_donations: None,
        };
        let report = template_report(&stats);
        assert!(report.contains("redistributed 12 toys"));
        assert!(!report.contains("Thank you for your"));

        stats.user_donations = Some(3);
        assert!(template_report(&stats).ends_with("Thank you for your 3 donations which contributed to this impact."));
    }
}
