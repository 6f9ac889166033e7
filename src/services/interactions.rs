//! Interaction telemetry service
//!
//! Read-only access to the interaction webhook; the source data for
//! the analytics aggregation.

use serde_json::json;
use tracing::debug;

use crate::config::Settings;
use crate::models::BotInteraction;
use crate::services::webhook::WebhookClient;
use crate::utils::errors::Result;

/// Service for listing bot interaction records
#[derive(Debug, Clone)]
pub struct InteractionService {
    client: WebhookClient,
    url: String,
}

impl InteractionService {
    /// Create a new InteractionService instance
    pub fn new(client: WebhookClient, settings: &Settings) -> Self {
        Self {
            client,
            url: settings.webhooks.interactions.clone(),
        }
    }

    /// Fetch all interaction records
    ///
    /// This endpoint takes an empty JSON body rather than an action field.
    pub async fn fetch_interactions(&self) -> Result<Vec<BotInteraction>> {
        let interactions = self.client.fetch_list(&self.url, &json!({})).await?;

        debug!(count = interactions.len(), "Fetched interactions");
        Ok(interactions)
    }
}
