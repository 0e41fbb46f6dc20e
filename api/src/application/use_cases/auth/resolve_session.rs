use crate::application::access::{Principal, SessionUser};
use crate::application::ports::session_store::SessionStore;
use crate::application::ports::user_repository::UserRepository;

pub struct ResolveSession<'a, R, S>
where
    R: UserRepository + ?Sized,
    S: SessionStore + ?Sized,
{
    pub repo: &'a R,
    pub sessions: &'a S,
}

impl<'a, R, S> ResolveSession<'a, R, S>
where
    R: UserRepository + ?Sized,
    S: SessionStore + ?Sized,
{
    pub async fn execute(&self, token: &str) -> anyhow::Result<Option<Principal>> {
        let Some(user_id) = self.sessions.lookup(token).await? else {
            return Ok(None);
        };
        let user = self.repo.find_by_id(user_id).await?;
        Ok(user.map(|u| Principal::from_authenticatable(&SessionUser(&u))))
    }
}
