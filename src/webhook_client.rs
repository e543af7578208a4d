use std::future::Future;
use std::time;

use anyhow::Context;
use reqwest::Client;
use url::Url;

use crate::domain::Notification;

/// Capability to deliver a notification to the contact channel
pub trait Notifier {
    /// Deliver a notification, a single attempt with no retries
    fn notify(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Chat webhook client data
#[derive(Debug)]
pub struct WebhookClient {
    http_client: Client,
    webhook_url: Url,
}

impl WebhookClient {
    /// Build a webhook client whose requests give up after `timeout`
    pub fn new(webhook_url: Url, timeout: time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            webhook_url,
        })
    }

    /// Post a message using Slack's incoming webhooks
    /// <https://api.slack.com/messaging/webhooks>
    #[tracing::instrument(name = "Posting notification to the chat webhook", skip_all)]
    pub async fn send_notification(
        &self,
        notification: &Notification,
    ) -> Result<(), reqwest::Error> {
        self.http_client
            .post(self.webhook_url.clone())
            .json(notification)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl Notifier for WebhookClient {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        self.send_notification(notification)
            .await
            .context("Failed to post notification to the chat webhook")
    }
}
