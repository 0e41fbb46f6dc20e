use async_trait::async_trait;

/// Token table backing logged-in sessions. Tokens are opaque to callers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, user_id: i64) -> anyhow::Result<String>;
    async fn lookup(&self, token: &str) -> anyhow::Result<Option<i64>>;
    async fn revoke(&self, token: &str) -> anyhow::Result<bool>;
}
