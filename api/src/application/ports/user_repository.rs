use async_trait::async_trait;

use crate::application::ports::store_error::StoreError;
use crate::domain::accounts::user::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        is_admin: bool,
    ) -> Result<User, StoreError>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    async fn update_password_hash(&self, id: i64, password_hash: &str) -> anyhow::Result<bool>;
    /// Newest first.
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
}
