#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use smartbusflow::application::ports::contact_message_repository::ContactMessageRepository;
use smartbusflow::application::ports::notifier::{NotificationError, Notifier};
use smartbusflow::application::ports::store_error::StoreError;
use smartbusflow::application::ports::subscriber_repository::SubscriberRepository;
use smartbusflow::application::ports::user_repository::UserRepository;
use smartbusflow::application::services::credentials::hash_password;
use smartbusflow::bootstrap::app_context::{AppContext, AppServices};
use smartbusflow::bootstrap::config::Config;
use smartbusflow::domain::accounts::user::User;
use smartbusflow::domain::contact::contact_message::ContactMessage;
use smartbusflow::domain::newsletter::subscriber::Subscriber;
use smartbusflow::infrastructure::sessions::InMemorySessionStore;

// In-memory stand-ins for the Postgres repositories. Listing order mirrors
// the SQL: newest first, ties broken by id.

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        is_admin: bool,
    ) -> Result<User, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateKey);
        }
        let user = User {
            id: rows.len() as i64 + 1,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            is_admin,
            created_at: Utc::now(),
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| u.id == id) {
            Some(u) => {
                u.password_hash = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }
}

impl MemoryUsers {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[derive(Default)]
pub struct MemorySubscribers {
    rows: Mutex<Vec<Subscriber>>,
}

#[async_trait]
impl SubscriberRepository for MemorySubscribers {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|s| s.email == email) {
            return Err(StoreError::DuplicateKey);
        }
        let sub = Subscriber {
            id: rows.len() as i64 + 1,
            email: email.to_string(),
            created_at: Utc::now(),
        };
        rows.push(sub.clone());
        Ok(sub)
    }

    async fn list_subscribers(&self) -> anyhow::Result<Vec<Subscriber>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }
}

impl MemorySubscribers {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[derive(Default)]
pub struct MemoryMessages {
    rows: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactMessageRepository for MemoryMessages {
    async fn create_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> anyhow::Result<ContactMessage> {
        let mut rows = self.rows.lock().unwrap();
        let msg = ContactMessage {
            id: rows.len() as i64 + 1,
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        };
        rows.push(msg.clone());
        Ok(msg)
    }

    async fn list_messages(&self) -> anyhow::Result<Vec<ContactMessage>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }
}

impl MemoryMessages {
    pub fn all(&self) -> Vec<ContactMessage> {
        self.rows.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Records every attempt; when `fail` is set each attempt errors after being recorded.
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if self.fail {
            return Err(NotificationError::Delivery(anyhow::anyhow!(
                "smtp relay unreachable"
            )));
        }
        Ok(())
    }
}

pub struct TestContext {
    pub users: Arc<MemoryUsers>,
    pub subscribers: Arc<MemorySubscribers>,
    pub messages: Arc<MemoryMessages>,
    pub sessions: Arc<InMemorySessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub ctx: AppContext,
}

impl TestContext {
    pub fn new() -> Self {
        Self::build(RecordingNotifier::default(), Config::default())
    }

    pub fn with_failing_notifier() -> Self {
        Self::build(RecordingNotifier::failing(), Config::default())
    }

    pub fn with_config(cfg: Config) -> Self {
        Self::build(RecordingNotifier::default(), cfg)
    }

    fn build(notifier: RecordingNotifier, cfg: Config) -> Self {
        let users = Arc::new(MemoryUsers::default());
        let subscribers = Arc::new(MemorySubscribers::default());
        let messages = Arc::new(MemoryMessages::default());
        let sessions = Arc::new(InMemorySessionStore::new());
        let notifier = Arc::new(notifier);
        let services = AppServices::new(
            users.clone(),
            subscribers.clone(),
            messages.clone(),
            sessions.clone(),
            notifier.clone(),
        );
        TestContext {
            users,
            subscribers,
            messages,
            sessions,
            notifier,
            ctx: AppContext::new(cfg, services),
        }
    }

    pub async fn seed_user(&self, name: &str, email: &str, password: &str, is_admin: bool) -> User {
        let hash = hash_password(password).unwrap();
        self.users
            .create_user(name, email, &hash, is_admin)
            .await
            .unwrap()
    }
}
