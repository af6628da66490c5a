use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct SendEmailRequest {
    #[validate(email)]
    #[serde(rename = "to_email")]
    pub to_email: String,

    #[validate(length(min = 1, message = "Subject must not be empty"))]
    #[serde(rename = "subject")]
    pub subject: String,

    /// HTML content, relayed verbatim. Callers are trusted.
    #[serde(rename = "body")]
    pub body: String,
}
