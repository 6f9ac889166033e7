//! Services module
//!
//! One service per webhook endpoint family. Each service owns its own
//! URLs and exposes explicit fetch/save methods; refreshing is calling
//! the fetch method again. Services hold no cached state and do not
//! interact with each other.

pub mod bots;
pub mod interactions;
pub mod subscriptions;
pub mod webhook;

// Re-export commonly used services
pub use bots::BotService;
pub use interactions::InteractionService;
pub use subscriptions::SubscriptionService;
pub use webhook::WebhookClient;

use crate::config::Settings;
use crate::utils::errors::Result;

/// Service factory for creating all webhook-backed services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub bot_service: BotService,
    pub subscription_service: SubscriptionService,
    pub interaction_service: InteractionService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services wired over a shared
    /// HTTP client
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = WebhookClient::new(settings)?;

        Ok(Self {
            bot_service: BotService::new(client.clone(), settings),
            subscription_service: SubscriptionService::new(client.clone(), settings),
            interaction_service: InteractionService::new(client, settings),
        })
    }
}
