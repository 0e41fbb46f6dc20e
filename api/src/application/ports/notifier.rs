use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
pub enum NotificationError {
    #[error("failed to deliver outbound message")]
    Delivery(#[source] anyhow::Error),
}

/// One delivery attempt per call. Callers treat failures as non-fatal: the
/// error is logged and dropped, never turned into a user-facing outcome.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError>;
}
