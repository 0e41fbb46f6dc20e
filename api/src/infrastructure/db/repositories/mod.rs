pub mod contact_message_repository_sqlx;
pub mod subscriber_repository_sqlx;
pub mod user_repository_sqlx;
