use crate::application::ports::contact_message_repository::ContactMessageRepository;
use crate::application::ports::notifier::Notifier;
use crate::domain::contact::contact_message::ContactMessage;

pub struct SubmitContactMessage<'a, R, N>
where
    R: ContactMessageRepository + ?Sized,
    N: Notifier + ?Sized,
{
    pub repo: &'a R,
    pub notifier: &'a N,
    pub admin_email: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl<'a, R, N> SubmitContactMessage<'a, R, N>
where
    R: ContactMessageRepository + ?Sized,
    N: Notifier + ?Sized,
{
    /// Empty fields are stored as given.
    pub async fn execute(&self, req: &ContactRequest) -> anyhow::Result<ContactMessage> {
        let saved = self
            .repo
            .create_message(&req.name, &req.email, &req.message)
            .await?;

        match self.admin_email {
            Some(admin) => {
                let subject = format!("New contact message from {}", req.name);
                let body = format!("From: {} <{}>\n\n{}", req.name, req.email, req.message);
                if let Err(err) = self.notifier.notify(admin, &subject, &body).await {
                    tracing::warn!(message_id = saved.id, error = ?err, "admin contact notification failed");
                }
            }
            None => {
                tracing::debug!(message_id = saved.id, "no admin address configured; skipping notification");
            }
        }
        Ok(saved)
    }
}
