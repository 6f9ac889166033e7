//! Error handling for botadmin
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the botadmin application
#[derive(Error, Debug)]
pub enum BotAdminError {
    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bot not found: {id}")]
    BotNotFound { id: i64 },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Webhook endpoint specific errors
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Webhook request failed: {0}")]
    RequestFailed(String),

    #[error("Webhook request timed out")]
    Timeout,

    #[error("Invalid webhook response: {0}")]
    InvalidResponse(String),

    #[error("Webhook endpoint unavailable")]
    ServiceUnavailable,
}

/// Result type alias for botadmin operations
pub type Result<T> = std::result::Result<T, BotAdminError>;

impl BotAdminError {
    /// Check if the error is recoverable by simply re-running the command
    pub fn is_recoverable(&self) -> bool {
        match self {
            BotAdminError::Webhook(_) => true,
            BotAdminError::Http(_) => true,
            BotAdminError::Io(_) => true,
            BotAdminError::Config(_) => false,
            BotAdminError::Validation(_) => false,
            BotAdminError::BotNotFound { .. } => false,
            BotAdminError::Serialization(_) => false,
            BotAdminError::UrlParse(_) => false,
        }
    }
}
