use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::{config::AppConfig, migration::Migrator, seed};

pub type OrmConn = DatabaseConnection;

const MOCK_DATABASE_URL: &str = "sqlite::memory:";
// The in-memory database lives only as long as its single connection.
const MOCK_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply every pending migration.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}

/// Connect according to the configuration: the live database when a URL is
/// present, otherwise a migrated and seeded in-memory database.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection> {
    match config.database_url.as_deref() {
        Some(url) => {
            let conn = create_orm_conn(url).await?;
            run_migrations(&conn).await?;
            tracing::info!("connected to live database");
            Ok(conn)
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, serving mock data from an in-memory database");
            let conn = create_mock_conn().await?;
            seed::seed_admin(&conn, &config.admin_email, seed::MOCK_ADMIN_PASSWORD).await?;
            Ok(conn)
        }
    }
}

/// In-memory SQLite database with the schema applied and mock reference data loaded.
pub async fn create_mock_conn() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(MOCK_DATABASE_URL.to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(MOCK_CONNECTION_LIFETIME)
        .max_lifetime(MOCK_CONNECTION_LIFETIME)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    run_migrations(&conn).await?;
    seed::seed_reference_data(&conn).await?;
    Ok(conn)
}
