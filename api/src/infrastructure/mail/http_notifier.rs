use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::notifier::{NotificationError, Notifier};

#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Sends mail through a JSON HTTP mail API (`POST {from, to, subject, text}`
/// with bearer auth).
pub struct HttpMailNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    from: String,
}

impl HttpMailNotifier {
    pub fn new(endpoint: String, api_key: Option<String>, from: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("smartbusflow/0.1 (+reqwest)")
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            from,
        })
    }
}

#[async_trait]
impl Notifier for HttpMailNotifier {
    async fn notify(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError> {
        let payload = OutboundEmail {
            from: &self.from,
            to: [recipient],
            subject,
            text: body,
        };
        let mut req = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| NotificationError::Delivery(anyhow::anyhow!("request failed: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(NotificationError::Delivery(anyhow::anyhow!(
                "mail API returned {status}: {detail}"
            )));
        }
        tracing::info!(%status, subject, "mail_dispatched");
        Ok(())
    }
}
