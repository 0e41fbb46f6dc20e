use std::sync::Arc;

use crate::application::ports::contact_message_repository::ContactMessageRepository;
use crate::application::ports::notifier::Notifier;
use crate::application::ports::session_store::SessionStore;
use crate::application::ports::subscriber_repository::SubscriberRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

/// Request-independent dependencies handed to every handler as axum state.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    subscriber_repo: Arc<dyn SubscriberRepository>,
    contact_repo: Arc<dyn ContactMessageRepository>,
    session_store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        session_store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            user_repo,
            subscriber_repo,
            contact_repo,
            session_store,
            notifier,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn subscriber_repo(&self) -> Arc<dyn SubscriberRepository> {
        self.services.subscriber_repo.clone()
    }

    pub fn contact_repo(&self) -> Arc<dyn ContactMessageRepository> {
        self.services.contact_repo.clone()
    }

    pub fn session_store(&self) -> Arc<dyn SessionStore> {
        self.services.session_store.clone()
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        self.services.notifier.clone()
    }
}
