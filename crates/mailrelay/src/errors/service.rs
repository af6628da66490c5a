use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
