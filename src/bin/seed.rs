use toycycle_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::{seed_admin, seed_reference_data},
};

const DEFAULT_ADMIN_PASSWORD: &str = "admin1234";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed"))?;

    let orm = create_orm_conn(database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    seed_reference_data(&orm).await?;
    println!("Seeded toy conditions, accessory types, locations and partners");

    let password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|p| p.len() >= 8)
        .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());
    let admin_id = seed_admin(&orm, &config.admin_email, &password).await?;

    println!("Seed completed. Admin ID: {admin_id} ({})", config.admin_email);
    Ok(())
}
