//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub webhooks: WebhookConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Webhook endpoint URLs
///
/// The remote automation system is the sole persistence and query
/// interface; every URL here is a fixed POST endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    pub fetch_bots: String,
    pub save_bot: String,
    pub create_bot: String,
    pub subscriptions: String,
    pub interactions: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("BOTADMIN").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BotAdminError> {
        super::validation::validate_settings(self)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "botadmin/0.1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: "logs".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_deserialization_from_toml() {
        let toml_str = r#"
            [webhooks]
            fetch_bots = "https://flows.example.com/webhook/bots-fetch"
            save_bot = "https://flows.example.com/webhook/bots-save"
            create_bot = "https://flows.example.com/webhook/bots-create"
            subscriptions = "https://flows.example.com/webhook/subscriptions"
            interactions = "https://flows.example.com/webhook/interactions"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.webhooks.fetch_bots,
            "https://flows.example.com/webhook/bots-fetch"
        );
        // Defaults apply when the sections are absent
        assert_eq!(settings.http.timeout_seconds, 30);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_http_config_override() {
        let toml_str = r#"
            [webhooks]
            fetch_bots = "https://a.example.com/1"
            save_bot = "https://a.example.com/2"
            create_bot = "https://a.example.com/3"
            subscriptions = "https://a.example.com/4"
            interactions = "https://a.example.com/5"

            [http]
            timeout_seconds = 5
            user_agent = "custom/1.0"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.http.timeout_seconds, 5);
        assert_eq!(settings.http.user_agent, "custom/1.0");
    }
}
