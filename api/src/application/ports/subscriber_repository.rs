use async_trait::async_trait;

use crate::application::ports::store_error::StoreError;
use crate::domain::newsletter::subscriber::Subscriber;

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber, StoreError>;
    /// Newest first.
    async fn list_subscribers(&self) -> anyhow::Result<Vec<Subscriber>>;
}
