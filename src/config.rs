use std::env;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@toycycle.com";
const DEV_JWT_SECRET: &str = "toycycle-dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` runs the service on the seeded in-memory database.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    pub admin_email: String,
    pub mail: Option<MailConfig>,
    pub llm: Option<LlmConfig>,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub sendgrid_api_key: String,
    pub from_email: String,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = non_empty_var("DATABASE_URL");
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let jwt_secret = match non_empty_var("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET is not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };
        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|h| h.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(24);
        let admin_email =
            non_empty_var("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string());

        let mail = match (
            non_empty_var("SENDGRID_API_KEY"),
            non_empty_var("SENDGRID_FROM_EMAIL"),
        ) {
            (Some(sendgrid_api_key), Some(from_email)) => Some(MailConfig {
                sendgrid_api_key,
                from_email,
            }),
            _ => None,
        };

        let llm = non_empty_var("LLM_API_KEY").map(|api_key| LlmConfig {
            api_key,
            base_url: non_empty_var("LLM_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: non_empty_var("LLM_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
        });

        Ok(Self {
            port,
            database_url,
            host,
            jwt_secret,
            session_ttl_hours,
            admin_email,
            mail,
            llm,
        })
    }

    /// Configuration for tests and local tooling: mock database, no outbound integrations.
    pub fn local() -> Self {
        Self {
            database_url: None,
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            session_ttl_hours: 24,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            mail: None,
            llm: None,
        }
    }

    pub fn is_mock_mode(&self) -> bool {
        self.database_url.is_none()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
