use crate::application::ports::store_error::StoreError;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::credentials;
use crate::domain::accounts::user::User;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub enum RegisterOutcome {
    Registered(User),
    AlreadyRegistered,
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> anyhow::Result<RegisterOutcome> {
        if self.repo.find_by_email(&req.email).await?.is_some() {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }
        let hash = credentials::hash_password(&req.password)?;
        // A concurrent registration can still win the race; the unique
        // constraint turns that into the same outcome.
        match self
            .repo
            .create_user(&req.name, &req.email, &hash, false)
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = user.id, "user_registered");
                Ok(RegisterOutcome::Registered(user))
            }
            Err(StoreError::DuplicateKey) => Ok(RegisterOutcome::AlreadyRegistered),
            Err(StoreError::Unexpected(e)) => Err(e),
        }
    }
}
