use std::time::Duration;

use reqwest::Client;
use tracing::{error, info};

use super::error::AlertError;
use super::types::WebhookPayload;
use crate::monitor::{AlertEvent, AlertPort};

pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: String, timeout: Duration) -> Result<Self, AlertError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, url })
    }

    /// Posts `{"content": message}` to the webhook.
    pub async fn post(&self, message: &str) -> Result<(), AlertError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { content: message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AlertError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

impl AlertPort for DiscordWebhook {
    async fn deliver(&self, event: &AlertEvent) {
        match self.post(&event.message).await {
            Ok(()) => info!(
                job_index = event.job_index,
                "Discord alert sent for Job {}.",
                event.job_index
            ),
            Err(e) => error!(
                job_index = event.job_index,
                kind = %e.kind(),
                error = %e,
                "Error sending Discord alert"
            ),
        }
    }
}
