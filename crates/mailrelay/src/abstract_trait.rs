use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::requests::SendEmailRequest;
use crate::errors::ServiceError;

pub type DynMailerService = Arc<dyn MailerServiceTrait>;

#[async_trait]
pub trait MailerServiceTrait: Send + Sync {
    async fn send(&self, req: &SendEmailRequest) -> Result<(), ServiceError>;
}
