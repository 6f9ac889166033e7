//! Data models module
//!
//! This module contains all data structures crossing the webhook boundary

pub mod bot;
pub mod interaction;
pub mod subscription;

// Re-export commonly used models
pub use bot::{BotConfig, NewBotConfig};
pub use interaction::BotInteraction;
pub use subscription::{
    distinct_bots, distinct_plans, distinct_statuses, Subscription, SubscriptionFilter,
};
