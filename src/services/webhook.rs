//! Shared webhook client
//!
//! All remote data lives behind fixed webhook URLs that accept JSON POSTs.
//! This module owns the HTTP client setup, error mapping, and the
//! normalization of scalar-or-array responses into lists, so that the
//! domain services never see the untyped shape of the remote contract.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::utils::errors::{BotAdminError, Result, WebhookError};

/// A webhook response that may be a bare object instead of an array
///
/// The remote contract is not strictly typed: endpoints that normally
/// return arrays answer with a single object when only one record exists.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> ListPayload<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Many(items) => items,
            ListPayload::One(item) => vec![item],
        }
    }
}

/// HTTP client for the webhook endpoints
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    /// Create a new WebhookClient from application settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.http.timeout_seconds))
            .user_agent(settings.http.user_agent.clone())
            .build()
            .map_err(BotAdminError::Http)?;

        Ok(Self { client })
    }

    /// Issue a JSON POST and return the raw response
    ///
    /// Non-2xx status is uniformly a failure regardless of body content.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        debug!(url = url, "Posting to webhook");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BotAdminError::Webhook(WebhookError::Timeout)
                } else if e.is_connect() {
                    BotAdminError::Webhook(WebhookError::ServiceUnavailable)
                } else {
                    BotAdminError::Webhook(WebhookError::RequestFailed(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(url = url, status = %status, "Webhook request failed");
            return Err(BotAdminError::Webhook(WebhookError::RequestFailed(
                format!("HTTP {}: {}", status, error_text),
            )));
        }

        Ok(response)
    }

    /// POST and decode a list response, coercing a bare object into a
    /// single-element list
    pub async fn fetch_list<B, T>(&self, url: &str, body: &B) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(url, body).await?;

        let payload: ListPayload<T> = response
            .json()
            .await
            .map_err(|e| BotAdminError::Webhook(WebhookError::InvalidResponse(e.to_string())))?;

        let records = payload.into_vec();
        debug!(url = url, records = records.len(), "Webhook list decoded");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[test]
    fn test_array_payload_decodes_as_list() {
        let json = r#"[{"name": "a"}, {"name": "b"}]"#;
        let payload: ListPayload<Row> = serde_json::from_str(json).unwrap();

        let rows = payload.into_vec();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "a");
    }

    #[test]
    fn test_scalar_payload_normalized_to_one_element_list() {
        let json = r#"{"name": "solo"}"#;
        let payload: ListPayload<Row> = serde_json::from_str(json).unwrap();

        let rows = payload.into_vec();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "solo");
    }

    #[test]
    fn test_empty_array_stays_empty() {
        let json = "[]";
        let payload: ListPayload<Row> = serde_json::from_str(json).unwrap();

        assert!(payload.into_vec().is_empty());
    }
}
