use async_trait::async_trait;

use crate::application::ports::notifier::{NotificationError, Notifier};

/// Stand-in when no mail API is configured: records the attempt and succeeds.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(
        &self,
        recipient: &str,
        subject: &str,
        _body: &str,
    ) -> Result<(), NotificationError> {
        tracing::info!(recipient, subject, "mail_not_configured_logging_only");
        Ok(())
    }
}
