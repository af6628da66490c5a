use anyhow::{Context, Result};

/// Process-wide configuration, read once at startup.
///
/// All three secrets are required: a missing variable fails `init` and the
/// process exits instead of silently rejecting every caller at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub gmail_user: String,
    pub gmail_app_password: String,
    pub api_key: String,
    pub port: u16,
}

impl Config {
    pub fn init() -> Result<Self> {
        let gmail_user =
            std::env::var("GMAIL_USER").context("Missing environment variable: GMAIL_USER")?;

        let gmail_app_password = std::env::var("GMAIL_APP_PASSWORD")
            .context("Missing environment variable: GMAIL_APP_PASSWORD")?;

        let api_key = std::env::var("EMAIL_API_KEY")
            .context("Missing environment variable: EMAIL_API_KEY")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        Ok(Self {
            gmail_user,
            gmail_app_password,
            api_key,
            port,
        })
    }
}
