//! Subscription service
//!
//! Read-only access to the subscription webhook.

use serde_json::json;
use tracing::debug;

use crate::config::Settings;
use crate::models::Subscription;
use crate::services::webhook::WebhookClient;
use crate::utils::errors::Result;

/// Service for listing subscription records
#[derive(Debug, Clone)]
pub struct SubscriptionService {
    client: WebhookClient,
    url: String,
}

impl SubscriptionService {
    /// Create a new SubscriptionService instance
    pub fn new(client: WebhookClient, settings: &Settings) -> Self {
        Self {
            client,
            url: settings.webhooks.subscriptions.clone(),
        }
    }

    /// Fetch all subscription records
    pub async fn fetch_subscriptions(&self) -> Result<Vec<Subscription>> {
        let subscriptions = self
            .client
            .fetch_list(&self.url, &json!({"action": "fetch"}))
            .await?;

        debug!(count = subscriptions.len(), "Fetched subscriptions");
        Ok(subscriptions)
    }
}
