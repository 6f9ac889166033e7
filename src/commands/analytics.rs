//! Analytics dashboard command
//!
//! Summary totals, terminal bar charts (people vs subscriptions per bot
//! and interactions per bot), and a per-bot detail table with each bot's
//! share of the totals and a totals footer row.

use colored::Colorize;

use crate::analytics::{format_share, AnalyticsReport, AnalyticsSummary, BotStats};
use crate::commands::render_table_with_footer;
use crate::services::InteractionService;
use crate::utils::errors::Result;

const CHART_WIDTH: usize = 40;

/// Render the analytics dashboard
pub async fn dashboard(service: &InteractionService, json: bool) -> Result<()> {
    let interactions = service.fetch_interactions().await?;
    let report = AnalyticsReport::new(&interactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Analytics".bold());
    println!();
    println!("  People         {}", report.summary.total_pessoas);
    println!("  Subscriptions  {}", report.summary.total_assinaturas);
    println!("  Interactions   {}", report.summary.total_interacoes);
    println!("  Conversion     {}%", report.conversion);
    println!();

    if report.bots.is_empty() {
        println!("No interaction data.");
        return Ok(());
    }

    println!("{}", "People vs subscriptions per bot".bold());
    println!();
    print!("{}", render_chart(&report.bots));
    println!();

    println!("{}", "Interactions per bot".bold());
    println!();
    print!("{}", render_interactions_chart(&report.bots));
    println!();

    println!("{}", "Per-bot detail".bold());
    println!();
    print!("{}", render_stats_table(&report.bots, &report.summary));

    Ok(())
}

/// Render grouped horizontal bars, scaled to the largest value
fn render_chart(stats: &[BotStats]) -> String {
    let max = stats
        .iter()
        .flat_map(|s| [s.total_pessoas as i64, s.total_assinaturas])
        .max()
        .unwrap_or(0);

    let name_width = name_column_width(stats);

    let mut out = String::new();
    for s in stats {
        out.push_str(&format!(
            "  {:<width$}  {} {}\n",
            s.nomebot,
            bar(s.total_pessoas as i64, max).blue(),
            s.total_pessoas,
            width = name_width,
        ));
        out.push_str(&format!(
            "  {:<width$}  {} {}\n",
            "",
            bar(s.total_assinaturas, max).green(),
            s.total_assinaturas,
            width = name_width,
        ));
    }

    out
}

/// Render one interaction-count bar per bot, scaled to the busiest bot
fn render_interactions_chart(stats: &[BotStats]) -> String {
    let max = stats.iter().map(|s| s.total_interacoes).max().unwrap_or(0);
    let name_width = name_column_width(stats);

    let mut out = String::new();
    for s in stats {
        out.push_str(&format!(
            "  {:<width$}  {} {}\n",
            s.nomebot,
            bar(s.total_interacoes, max).cyan(),
            s.total_interacoes,
            width = name_width,
        ));
    }

    out
}

fn name_column_width(stats: &[BotStats]) -> usize {
    stats
        .iter()
        .map(|s| s.nomebot.chars().count())
        .max()
        .unwrap_or(0)
}

/// Per-bot detail table with share-of-total columns and a TOTAL footer
fn render_stats_table(stats: &[BotStats], summary: &AnalyticsSummary) -> String {
    let rows: Vec<Vec<String>> = stats
        .iter()
        .map(|s| {
            vec![
                s.nomebot.clone(),
                s.total_pessoas.to_string(),
                format!(
                    "{}%",
                    format_share(s.total_pessoas as i64, summary.total_pessoas as i64)
                ),
                s.total_assinaturas.to_string(),
                format!(
                    "{}%",
                    format_share(s.total_assinaturas, summary.total_assinaturas)
                ),
                s.total_interacoes.to_string(),
                format!("{}%", s.conversion_rate()),
            ]
        })
        .collect();

    let total = vec![
        "TOTAL".to_string(),
        summary.total_pessoas.to_string(),
        format!(
            "{}%",
            format_share(summary.total_pessoas as i64, summary.total_pessoas as i64)
        ),
        summary.total_assinaturas.to_string(),
        format!(
            "{}%",
            format_share(summary.total_assinaturas, summary.total_assinaturas)
        ),
        summary.total_interacoes.to_string(),
        format!("{}%", summary.conversion_rate()),
    ];

    render_table_with_footer(
        &[
            "BOT",
            "PEOPLE",
            "PEOPLE %",
            "SUBSCRIPTIONS",
            "SUBS %",
            "INTERACTIONS",
            "CONVERSION",
        ],
        &rows,
        Some(&total),
    )
}

/// A bar of block characters proportional to value / max
///
/// Nonzero values always get at least one block.
fn bar(value: i64, max: i64) -> String {
    if value <= 0 || max <= 0 {
        return String::new();
    }

    let scaled = ((value as f64 / max as f64) * CHART_WIDTH as f64).round() as usize;
    "█".repeat(scaled.max(1))
}
