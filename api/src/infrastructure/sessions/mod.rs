use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::session_store::SessionStore;
use crate::infrastructure::crypto::generate_session_token;

/// Process-local token table. Sessions do not survive a restart.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<RwLock<HashMap<String, i64>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user_id: i64) -> anyhow::Result<String> {
        let token = generate_session_token();
        self.inner.write().await.insert(token.clone(), user_id);
        tracing::debug!(user_id, "session_created");
        Ok(token)
    }

    async fn lookup(&self, token: &str) -> anyhow::Result<Option<i64>> {
        Ok(self.inner.read().await.get(token).copied())
    }

    async fn revoke(&self, token: &str) -> anyhow::Result<bool> {
        let removed = self.inner.write().await.remove(token);
        if let Some(user_id) = removed {
            tracing::debug!(user_id, "session_revoked");
        }
        Ok(removed.is_some())
    }
}
