use crate::application::access::{self, AccessError, Principal};
use crate::application::dto::dashboard::{DashboardDto, UserSummaryDto};
use crate::application::ports::contact_message_repository::ContactMessageRepository;
use crate::application::ports::subscriber_repository::SubscriberRepository;
use crate::application::ports::user_repository::UserRepository;

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("failed to load dashboard listings")]
    Store(#[source] anyhow::Error),
}

pub struct AdminOverview<'a, U, S, C>
where
    U: UserRepository + ?Sized,
    S: SubscriberRepository + ?Sized,
    C: ContactMessageRepository + ?Sized,
{
    pub users: &'a U,
    pub subscribers: &'a S,
    pub messages: &'a C,
}

impl<'a, U, S, C> AdminOverview<'a, U, S, C>
where
    U: UserRepository + ?Sized,
    S: SubscriberRepository + ?Sized,
    C: ContactMessageRepository + ?Sized,
{
    pub async fn execute(&self, principal: Option<&Principal>) -> Result<DashboardDto, DashboardError> {
        let principal = access::require_authenticated(principal)?;
        access::require_admin(principal)?;

        let users = self.users.list_users().await.map_err(DashboardError::Store)?;
        let subscribers = self
            .subscribers
            .list_subscribers()
            .await
            .map_err(DashboardError::Store)?;
        let messages = self
            .messages
            .list_messages()
            .await
            .map_err(DashboardError::Store)?;

        Ok(DashboardDto {
            users: users.into_iter().map(UserSummaryDto::from).collect(),
            subscribers,
            messages,
        })
    }
}
