//! Webhook Channel Implementation
//!
//! Posts each reply as JSON to an HTTP messaging gateway:
//!
//! ```json
//! {"to": "905551112233", "text": "..."}
//! ```
//!
//! The gateway addresses subscribers by bare digits, so the `+` and any
//! formatting are stripped from the identity before sending. A JSON response
//! carrying `id` or `message_id` is used as the message id.

use async_trait::async_trait;
use relay_core::errors::DomainError;
use relay_core::services::ChannelSender;
use relay_shared::phone::{digits_only, mask_phone_number};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ChannelConfig;
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    to: &'a str,
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
}

/// Channel that delivers replies through an HTTP webhook
pub struct WebhookChannel {
    client: reqwest::Client,
    url: String,
    auth_token: Option<String>,
    ready: AtomicBool,
}

impl WebhookChannel {
    /// Create a new webhook channel
    pub fn new(config: &ChannelConfig) -> Result<Self, InfrastructureError> {
        let url = config
            .webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| InfrastructureError::Config("webhook_url not set".to_string()))?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(InfrastructureError::Config(format!(
                "webhook_url must be an http(s) URL: {}",
                url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        info!(url = %url, "Webhook channel initialized");

        Ok(Self {
            client,
            url: url.to_string(),
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
            ready: AtomicBool::new(true),
        })
    }

    /// Gateway address for a subscriber identity
    pub fn recipient(identity: &str) -> Result<String, InfrastructureError> {
        let digits = digits_only(identity);
        if digits.is_empty() {
            return Err(InfrastructureError::Channel(format!(
                "Recipient has no digits: {}",
                mask_phone_number(identity)
            )));
        }
        Ok(digits)
    }

    async fn post(&self, identity: &str, text: &str) -> Result<String, InfrastructureError> {
        let to = Self::recipient(identity)?;

        debug!(
            to = %mask_phone_number(&to),
            length = text.chars().count(),
            "Posting reply to webhook"
        );

        let mut request = self.client.post(&self.url).json(&OutboundMessage { to: &to, text });
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Channel(format!(
                "Webhook returned {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let parsed: GatewayResponse = serde_json::from_str(&body).unwrap_or_default();
        let message_id = parsed
            .id
            .or(parsed.message_id)
            .unwrap_or_else(|| format!("webhook_{}", uuid::Uuid::new_v4()));

        Ok(message_id)
    }
}

#[async_trait]
impl ChannelSender for WebhookChannel {
    async fn send_text(&self, identity: &str, text: &str) -> Result<String, DomainError> {
        match self.post(identity, text).await {
            Ok(message_id) => {
                self.ready.store(true, Ordering::SeqCst);
                info!(
                    to = %mask_phone_number(identity),
                    message_id = %message_id,
                    "Reply sent via webhook"
                );
                Ok(message_id)
            }
            Err(e) => {
                // transport failures mark the channel down until the next success
                if matches!(e, InfrastructureError::Http(_)) {
                    self.ready.store(false, Ordering::SeqCst);
                }
                warn!(
                    to = %mask_phone_number(identity),
                    error = %e,
                    "Webhook delivery failed"
                );
                Err(e.into())
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}
