//! Analytics module
//!
//! Derived, in-memory statistics over the interaction telemetry.

pub mod aggregate;

pub use aggregate::{
    aggregate_bot_stats, format_conversion_rate, format_share, AnalyticsReport, AnalyticsSummary,
    BotStats,
};
