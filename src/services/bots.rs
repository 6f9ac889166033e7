//! Bot configuration service
//!
//! Fetch, save, and create operations against the bot-config webhooks.

use serde_json::json;
use tracing::{debug, info};

use crate::config::Settings;
use crate::models::{BotConfig, NewBotConfig};
use crate::services::webhook::WebhookClient;
use crate::utils::errors::{BotAdminError, Result};

/// Service for managing bot configurations
#[derive(Debug, Clone)]
pub struct BotService {
    client: WebhookClient,
    fetch_url: String,
    save_url: String,
    create_url: String,
}

impl BotService {
    /// Create a new BotService instance
    pub fn new(client: WebhookClient, settings: &Settings) -> Self {
        Self {
            client,
            fetch_url: settings.webhooks.fetch_bots.clone(),
            save_url: settings.webhooks.save_bot.clone(),
            create_url: settings.webhooks.create_bot.clone(),
        }
    }

    /// Fetch all bot configurations
    ///
    /// A scalar response (a single bot) is normalized into a one-element
    /// list at the client boundary.
    pub async fn fetch_bots(&self) -> Result<Vec<BotConfig>> {
        let bots = self
            .client
            .fetch_list(&self.fetch_url, &json!({"action": "fetch"}))
            .await?;

        debug!(count = bots.len(), "Fetched bot configurations");
        Ok(bots)
    }

    /// Find a single bot configuration by id
    pub async fn fetch_bot(&self, id: i64) -> Result<BotConfig> {
        let bots = self.fetch_bots().await?;

        bots.into_iter()
            .find(|bot| bot.id == id)
            .ok_or(BotAdminError::BotNotFound { id })
    }

    /// Save (update) an existing bot configuration
    ///
    /// Posts the full record as held; no client-side validation is applied,
    /// blank fields included. Success is any 2xx status, body ignored.
    pub async fn save_bot(&self, bot: &BotConfig) -> Result<()> {
        self.client.post(&self.save_url, bot).await?;

        info!(bot_id = bot.id, nomebot = %bot.nomebot, "Bot configuration saved");
        Ok(())
    }

    /// Create a new bot configuration
    ///
    /// Validates the record first; the first failing rule aborts the
    /// submission with its message.
    pub async fn create_bot(&self, bot: &NewBotConfig) -> Result<()> {
        bot.validate()?;

        self.client.post(&self.create_url, bot).await?;

        info!(nomebot = %bot.nomebot, "Bot configuration created");
        Ok(())
    }
}
