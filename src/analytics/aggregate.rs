//! Interaction aggregation
//!
//! Turns the flat interaction list into per-bot summary statistics and
//! dashboard totals. Everything here is recomputed on every fetch and
//! never persisted.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::BotInteraction;

/// Per-bot summary statistics derived from the interaction list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BotStats {
    pub nomebot: String,
    /// Row count; each interaction record is one person
    pub total_pessoas: usize,
    pub total_assinaturas: i64,
    pub total_interacoes: i64,
}

impl BotStats {
    fn new(nomebot: String) -> Self {
        Self {
            nomebot,
            total_pessoas: 0,
            total_assinaturas: 0,
            total_interacoes: 0,
        }
    }

    /// Conversion rate for this bot, formatted to one decimal place
    ///
    /// Returns "0" when the bot has no people, not a signal of missing data.
    pub fn conversion_rate(&self) -> String {
        format_conversion_rate(self.total_assinaturas, self.total_pessoas)
    }
}

/// Group interactions by exact bot name and sum their counters
///
/// Grouping is strict string equality on `nomebot`; no case or whitespace
/// normalization is applied, so distinct spellings stay distinct groups.
/// Output order is the first-seen order of bot names.
pub fn aggregate_bot_stats(interactions: &[BotInteraction]) -> Vec<BotStats> {
    let mut stats: IndexMap<&str, BotStats> = IndexMap::new();

    for interaction in interactions {
        let entry = stats
            .entry(interaction.nomebot.as_str())
            .or_insert_with(|| BotStats::new(interaction.nomebot.clone()));

        entry.total_pessoas += 1;
        entry.total_assinaturas += interaction.assinaturas;
        entry.total_interacoes += interaction.quantidade_interacoes;
    }

    stats.into_values().collect()
}

/// Dashboard totals derived over the full interaction list
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub total_pessoas: usize,
    pub total_assinaturas: i64,
    pub total_interacoes: i64,
}

impl AnalyticsSummary {
    /// Compute totals from the raw interaction list
    pub fn from_interactions(interactions: &[BotInteraction]) -> Self {
        let stats = aggregate_bot_stats(interactions);
        Self::from_stats(interactions.len(), &stats)
    }

    /// Compute totals from already-aggregated stats
    ///
    /// `total_people` is the raw input row count, not a sum over the stats.
    pub fn from_stats(total_people: usize, stats: &[BotStats]) -> Self {
        Self {
            total_pessoas: total_people,
            total_assinaturas: stats.iter().map(|s| s.total_assinaturas).sum(),
            total_interacoes: stats.iter().map(|s| s.total_interacoes).sum(),
        }
    }

    /// Overall conversion rate, formatted to one decimal place
    pub fn conversion_rate(&self) -> String {
        format_conversion_rate(self.total_assinaturas, self.total_pessoas)
    }
}

/// subscriptions ÷ people × 100, one decimal place, "0" when people = 0
pub fn format_conversion_rate(subscriptions: i64, people: usize) -> String {
    if people == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", (subscriptions as f64 / people as f64) * 100.0)
    }
}

/// part ÷ whole × 100, one decimal place, "0" when the whole is 0
///
/// Used for each bot's percentage share of the dashboard totals.
pub fn format_share(part: i64, whole: i64) -> String {
    if whole == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", (part as f64 / whole as f64) * 100.0)
    }
}

/// The full analytics data set in one serializable shape
///
/// This is what the `--json` output of the analytics command emits.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub summary: AnalyticsSummary,
    pub conversion: String,
    pub bots: Vec<BotStats>,
}

impl AnalyticsReport {
    /// Build the report from the raw interaction list
    pub fn new(interactions: &[BotInteraction]) -> Self {
        let bots = aggregate_bot_stats(interactions);
        let summary = AnalyticsSummary::from_stats(interactions.len(), &bots);
        let conversion = summary.conversion_rate();

        Self {
            summary,
            conversion,
            bots,
        }
    }
}
