//! Subscription model and filtering
//!
//! Subscriptions are read-only here; their lifecycle is owned by the
//! remote automation system. Field names follow the webhook contract.

use serde::{Deserialize, Serialize};

/// Status value conventionally used for an active subscription
pub const STATUS_ACTIVE: &str = "ATIVO";

/// A client's paid access period to a given bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub cliente: String,
    pub bot_contratado: String,
    pub assinatura: String,
    pub data_assinatura: String,
    pub data_vencimento: String,
    pub status: String,
    pub idtelegram: i64,
}

impl Subscription {
    /// Whether this subscription is in the conventional active state
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Three independent equality filters combined with logical AND
///
/// An unset filter matches every record.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionFilter {
    pub status: Option<String>,
    pub bot: Option<String>,
    pub plan: Option<String>,
}

impl SubscriptionFilter {
    /// Whether any filter is set
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.bot.is_none() && self.plan.is_none()
    }

    /// Whether a record matches all set filters
    pub fn matches(&self, subscription: &Subscription) -> bool {
        let matches_status = self
            .status
            .as_ref()
            .is_none_or(|status| subscription.status == *status);
        let matches_bot = self
            .bot
            .as_ref()
            .is_none_or(|bot| subscription.bot_contratado == *bot);
        let matches_plan = self
            .plan
            .as_ref()
            .is_none_or(|plan| subscription.assinatura == *plan);

        matches_status && matches_bot && matches_plan
    }

    /// Filter a list, preserving input order
    pub fn apply<'a>(&self, subscriptions: &'a [Subscription]) -> Vec<&'a Subscription> {
        subscriptions.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Distinct status values present in the data set, sorted lexicographically
pub fn distinct_statuses(subscriptions: &[Subscription]) -> Vec<String> {
    distinct(subscriptions, |s| &s.status)
}

/// Distinct contracted bot names, sorted lexicographically
pub fn distinct_bots(subscriptions: &[Subscription]) -> Vec<String> {
    distinct(subscriptions, |s| &s.bot_contratado)
}

/// Distinct subscription plan labels, sorted lexicographically
pub fn distinct_plans(subscriptions: &[Subscription]) -> Vec<String> {
    distinct(subscriptions, |s| &s.assinatura)
}

fn distinct<F>(subscriptions: &[Subscription], field: F) -> Vec<String>
where
    F: Fn(&Subscription) -> &String,
{
    let mut values: Vec<String> = subscriptions.iter().map(|s| field(s).clone()).collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(cliente: &str, bot: &str, plan: &str, status: &str) -> Subscription {
        Subscription {
            id: 1,
            cliente: cliente.to_string(),
            bot_contratado: bot.to_string(),
            assinatura: plan.to_string(),
            data_assinatura: "01/01/2025".to_string(),
            data_vencimento: "31/01/2025".to_string(),
            status: status.to_string(),
            idtelegram: 42,
        }
    }

    fn sample() -> Vec<Subscription> {
        vec![
            subscription("Ana", "BotA", "30 dias", "ATIVO"),
            subscription("Bruno", "BotB", "7 dias", "VENCIDO"),
            subscription("Clara", "BotA", "7 dias", "ATIVO"),
            subscription("Davi", "BotB", "30 dias", "ATIVO"),
        ]
    }

    #[test]
    fn test_unset_filter_matches_everything() {
        let subs = sample();
        let filter = SubscriptionFilter::default();

        assert!(filter.is_empty());
        assert_eq!(filter.apply(&subs).len(), subs.len());
    }

    #[test]
    fn test_single_filter() {
        let subs = sample();
        let filter = SubscriptionFilter {
            bot: Some("BotA".to_string()),
            ..Default::default()
        };

        let result = filter.apply(&subs);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.bot_contratado == "BotA"));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let subs = sample();
        let filter = SubscriptionFilter {
            status: Some("ATIVO".to_string()),
            bot: Some("BotB".to_string()),
            plan: Some("30 dias".to_string()),
        };

        let result = filter.apply(&subs);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].cliente, "Davi");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let subs = sample();
        let filter = SubscriptionFilter {
            status: Some("CANCELADO".to_string()),
            ..Default::default()
        };

        assert!(filter.apply(&subs).is_empty());
    }

    #[test]
    fn test_filter_is_exhaustive() {
        // Every record matching all set filters is kept
        let subs = sample();
        let filter = SubscriptionFilter {
            plan: Some("7 dias".to_string()),
            ..Default::default()
        };

        let result = filter.apply(&subs);
        let expected = subs.iter().filter(|s| s.assinatura == "7 dias").count();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn test_distinct_values_sorted_and_deduped() {
        let subs = sample();

        assert_eq!(distinct_bots(&subs), vec!["BotA", "BotB"]);
        assert_eq!(distinct_plans(&subs), vec!["30 dias", "7 dias"]);
        assert_eq!(distinct_statuses(&subs), vec!["ATIVO", "VENCIDO"]);
    }

    #[test]
    fn test_is_active() {
        assert!(subscription("Ana", "BotA", "30 dias", "ATIVO").is_active());
        assert!(!subscription("Ana", "BotA", "30 dias", "VENCIDO").is_active());
    }
}
