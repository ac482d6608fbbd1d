use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::OrmConn,
    llm::{ChatModel, OpenAiChatModel},
    mail::Mailer,
};

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    pub config: Arc<AppConfig>,
    pub mailer: Mailer,
    /// `None` when no LLM provider is configured.
    pub llm: Option<Arc<dyn ChatModel>>,
}

impl AppState {
    pub fn new(orm: OrmConn, config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        let mailer = Mailer::new(config.mail.clone(), http.clone());
        let llm = config
            .llm
            .clone()
            .map(|llm| Arc::new(OpenAiChatModel::new(llm, http)) as Arc<dyn ChatModel>);

        Ok(Self {
            orm,
            config: Arc::new(config),
            mailer,
            llm,
        })
    }
}
