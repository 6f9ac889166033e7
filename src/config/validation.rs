//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{BotAdminError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_webhook_config(&settings.webhooks)?;
    validate_http_config(&settings.http)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate webhook endpoint URLs
fn validate_webhook_config(config: &super::WebhookConfig) -> Result<()> {
    validate_url("webhooks.fetch_bots", &config.fetch_bots)?;
    validate_url("webhooks.save_bot", &config.save_bot)?;
    validate_url("webhooks.create_bot", &config.create_bot)?;
    validate_url("webhooks.subscriptions", &config.subscriptions)?;
    validate_url("webhooks.interactions", &config.interactions)?;
    Ok(())
}

fn validate_url(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BotAdminError::Config(format!("{key} is required")));
    }

    Url::parse(value)
        .map_err(|e| BotAdminError::Config(format!("{key} is not a valid URL: {e}")))?;

    Ok(())
}

/// Validate HTTP client configuration
fn validate_http_config(config: &super::HttpConfig) -> Result<()> {
    if config.timeout_seconds == 0 {
        return Err(BotAdminError::Config(
            "http.timeout_seconds must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BotAdminError::Config(
            "logging.level is required".to_string(),
        ));
    }

    if config.file_path.is_empty() {
        return Err(BotAdminError::Config(
            "logging.file_path is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HttpConfig, LoggingConfig, WebhookConfig};

    fn valid_settings() -> Settings {
        Settings {
            webhooks: WebhookConfig {
                fetch_bots: "https://flows.example.com/webhook/1".to_string(),
                save_bot: "https://flows.example.com/webhook/2".to_string(),
                create_bot: "https://flows.example.com/webhook/3".to_string(),
                subscriptions: "https://flows.example.com/webhook/4".to_string(),
                interactions: "https://flows.example.com/webhook/5".to_string(),
            },
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_empty_webhook_url_rejected() {
        let mut settings = valid_settings();
        settings.webhooks.save_bot = String::new();

        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("webhooks.save_bot"));
    }

    #[test]
    fn test_malformed_webhook_url_rejected() {
        let mut settings = valid_settings();
        settings.webhooks.interactions = "not a url".to_string();

        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("webhooks.interactions"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut settings = valid_settings();
        settings.http.timeout_seconds = 0;

        assert!(validate_settings(&settings).is_err());
    }
}
