use crate::application::ports::user_repository::UserRepository;
use crate::application::services::credentials;

pub struct SetPassword<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> SetPassword<'a, R> {
    /// Returns `false` when no such user exists.
    pub async fn execute(&self, user_id: i64, plaintext: &str) -> anyhow::Result<bool> {
        let Some(mut user) = self.repo.find_by_id(user_id).await? else {
            return Ok(false);
        };
        credentials::set_password(&mut user, plaintext)?;
        self.repo
            .update_password_hash(user.id, &user.password_hash)
            .await
    }
}
