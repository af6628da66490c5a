use crate::{
    abstract_trait::DynMailerService,
    config::Config,
    service::MailerService,
};
use anyhow::{Context, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub mailer: DynMailerService,
    pub api_key: Arc<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let mailer = Arc::new(
            MailerService::new(&config.gmail_user, &config.gmail_app_password)
                .context("Failed to create SMTP mailer")?,
        ) as DynMailerService;

        Ok(Self {
            mailer,
            api_key: Arc::new(config.api_key.clone()),
        })
    }
}
