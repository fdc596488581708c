use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;

use crate::models::application::NotificationPayload;
use crate::pipeline::{NotifyError, Notifier};

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://hook.profusaodigital.com/webhook/programa-jovem-aprendiz-microlins";

/// Forwards applications to the outreach webhook.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jovem-aprendiz/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, payload: &NotificationPayload, origin: &str) -> Result<(), NotifyError> {
        // The response body is never read.
        let res = self
            .client
            .post(&self.url)
            .header(header::ORIGIN, origin)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }
        log::debug!("Webhook accepted payload with status {status}");
        Ok(())
    }
}
