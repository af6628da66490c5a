use crate::{
    abstract_trait::MailerServiceTrait, domain::requests::SendEmailRequest, errors::ServiceError,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
};
use tracing::{error, info};

type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// Fixed submission endpoint, STARTTLS upgrade before auth.
pub const SMTP_HOST: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 587;

#[derive(Clone)]
pub struct MailerService {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl MailerService {
    /// The account identity doubles as login and `From` address.
    pub fn new(username: &str, password: &str) -> Result<Self> {
        let creds = Credentials::new(username.to_string(), password.to_string());

        let mailer = SmtpTransport::starttls_relay(SMTP_HOST)
            .context("Failed to create SMTP relay")?
            .credentials(creds)
            .port(SMTP_PORT)
            .build();

        let from: Mailbox = username
            .parse()
            .context("Invalid sender email format")?;

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl MailerServiceTrait for MailerService {
    async fn send(&self, req: &SendEmailRequest) -> Result<(), ServiceError> {
        let to: Mailbox = req.to_email.parse().map_err(|e| {
            error!("❌ Invalid recipient email: {}", e);
            ServiceError::InvalidRecipient(format!("{e}"))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(req.subject.clone())
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(req.body.clone())))
            .map_err(|e| {
                error!("❌ Failed to build email: {}", e);
                ServiceError::Internal(format!("Failed to build email: {e}"))
            })?;

        match self.mailer.send(email).await {
            Ok(_) => {
                info!("✅ Email sent to {}", req.to_email);
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to send email to {}: {}", req.to_email, e);
                Err(ServiceError::Smtp(format!("{e}")))
            }
        }
    }
}
