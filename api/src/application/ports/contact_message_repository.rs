use async_trait::async_trait;

use crate::domain::contact::contact_message::ContactMessage;

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> anyhow::Result<ContactMessage>;
    /// Newest first.
    async fn list_messages(&self) -> anyhow::Result<Vec<ContactMessage>>;
}
