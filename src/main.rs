use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toycycle_api::{app::build_router, config::AppConfig, db, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,toycycle_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    if config.mail.is_none() {
        tracing::warn!("SendGrid is not configured, confirmation emails are disabled");
    }
    if config.llm.is_none() {
        tracing::warn!("LLM_API_KEY is not set, chat and impact reports use fallbacks");
    }

    let orm = db::connect(&config).await?;
    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    let state = AppState::new(orm, config)?;
    let app = build_router(state);

    tracing::info!("listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
