use crate::application::ports::notifier::Notifier;
use crate::application::ports::store_error::StoreError;
use crate::application::ports::subscriber_repository::SubscriberRepository;
use crate::domain::newsletter::subscriber::Subscriber;

const WELCOME_SUBJECT: &str = "Welcome to SmartBusFlow";
const WELCOME_BODY: &str =
    "Thanks for subscribing to SmartBusFlow updates! We'll keep you posted on new routes and features.";

#[derive(thiserror::Error, Debug)]
pub enum SubscribeError {
    #[error("an email address is required")]
    MissingEmail,
    #[error("failed to store subscriber")]
    Store(#[source] anyhow::Error),
}

#[derive(Debug)]
pub enum SubscribeOutcome {
    Subscribed(Subscriber),
    AlreadySubscribed,
}

pub struct Subscribe<'a, R, N>
where
    R: SubscriberRepository + ?Sized,
    N: Notifier + ?Sized,
{
    pub repo: &'a R,
    pub notifier: &'a N,
}

impl<'a, R, N> Subscribe<'a, R, N>
where
    R: SubscriberRepository + ?Sized,
    N: Notifier + ?Sized,
{
    pub async fn execute(&self, email: Option<&str>) -> Result<SubscribeOutcome, SubscribeError> {
        let email = email
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(SubscribeError::MissingEmail)?;

        let subscriber = match self.repo.create_subscriber(email).await {
            Ok(s) => s,
            Err(StoreError::DuplicateKey) => return Ok(SubscribeOutcome::AlreadySubscribed),
            Err(StoreError::Unexpected(e)) => return Err(SubscribeError::Store(e)),
        };

        // Best effort: the subscription stands whether or not the mail goes out.
        if let Err(err) = self
            .notifier
            .notify(&subscriber.email, WELCOME_SUBJECT, WELCOME_BODY)
            .await
        {
            tracing::warn!(subscriber_id = subscriber.id, error = ?err, "welcome notification failed");
        }
        Ok(SubscribeOutcome::Subscribed(subscriber))
    }
}
