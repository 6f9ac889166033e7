//! Subscription listing command
//!
//! Renders the subscription table with the three optional equality
//! filters applied. Filter option lists are derived from the loaded
//! data, not a fixed enumeration.

use colored::Colorize;

use crate::commands::render_table;
use crate::models::{distinct_bots, distinct_plans, distinct_statuses, SubscriptionFilter};
use crate::services::SubscriptionService;
use crate::utils::errors::Result;

/// List subscriptions, optionally filtered by status, bot, and plan
pub async fn list(service: &SubscriptionService, filter: &SubscriptionFilter) -> Result<()> {
    let subscriptions = service.fetch_subscriptions().await?;
    let filtered = filter.apply(&subscriptions);

    println!(
        "{}",
        format!("Subscriptions ({}/{})", filtered.len(), subscriptions.len()).bold()
    );

    if !filter.is_empty() {
        let mut active: Vec<String> = Vec::new();
        if let Some(status) = &filter.status {
            active.push(format!("status={status}"));
        }
        if let Some(bot) = &filter.bot {
            active.push(format!("bot={bot}"));
        }
        if let Some(plan) = &filter.plan {
            active.push(format!("plan={plan}"));
        }
        println!("Filters: {}", active.join(", "));
    }
    println!();

    if filtered.is_empty() {
        println!("No subscriptions matched.");
    } else {
        let rows: Vec<Vec<String>> = filtered
            .iter()
            .map(|s| {
                // Status goes last so its color escapes cannot skew the
                // padding of the columns after it
                let status = if s.is_active() {
                    s.status.green().to_string()
                } else {
                    s.status.red().to_string()
                };
                vec![
                    s.cliente.clone(),
                    s.bot_contratado.clone(),
                    s.assinatura.clone(),
                    s.data_assinatura.clone(),
                    s.data_vencimento.clone(),
                    s.idtelegram.to_string(),
                    status,
                ]
            })
            .collect();

        print!(
            "{}",
            render_table(
                &[
                    "CLIENT",
                    "BOT",
                    "PLAN",
                    "STARTED",
                    "EXPIRES",
                    "TELEGRAM ID",
                    "STATUS",
                ],
                &rows,
            )
        );
    }

    println!();
    println!(
        "Available filters: status [{}], bot [{}], plan [{}]",
        distinct_statuses(&subscriptions).join(", "),
        distinct_bots(&subscriptions).join(", "),
        distinct_plans(&subscriptions).join(", "),
    );

    Ok(())
}
