use crate::application::access::{Principal, SessionUser};
use crate::application::ports::session_store::SessionStore;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::credentials;

pub struct Login<'a, R, S>
where
    R: UserRepository + ?Sized,
    S: SessionStore + ?Sized,
{
    pub repo: &'a R,
    pub sessions: &'a S,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct EstablishedSession {
    pub token: String,
    pub principal: Principal,
}

impl<'a, R, S> Login<'a, R, S>
where
    R: UserRepository + ?Sized,
    S: SessionStore + ?Sized,
{
    /// `Ok(None)` covers both an unknown email and a wrong password so the
    /// caller cannot tell the two apart.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<EstablishedSession>> {
        let user = match self.repo.find_by_email(&req.email).await? {
            Some(u) => u,
            None => return Ok(None),
        };
        if !credentials::verify_password(&user, &req.password) {
            return Ok(None);
        }
        let token = self.sessions.create(user.id).await?;
        Ok(Some(EstablishedSession {
            token,
            principal: Principal::from_authenticatable(&SessionUser(&user)),
        }))
    }
}
