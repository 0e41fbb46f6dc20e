pub mod contact_message_repository;
pub mod notifier;
pub mod session_store;
pub mod store_error;
pub mod subscriber_repository;
pub mod user_repository;
