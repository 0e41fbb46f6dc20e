//! Repository tests against a real Postgres. Each test is a no-op unless
//! `DATABASE_URL` points at a disposable database.

use smartbusflow::application::ports::contact_message_repository::ContactMessageRepository;
use smartbusflow::application::ports::store_error::StoreError;
use smartbusflow::application::ports::subscriber_repository::SubscriberRepository;
use smartbusflow::application::ports::user_repository::UserRepository;
use smartbusflow::infrastructure::crypto::generate_session_token;
use smartbusflow::infrastructure::db::repositories::contact_message_repository_sqlx::SqlxContactMessageRepository;
use smartbusflow::infrastructure::db::repositories::subscriber_repository_sqlx::SqlxSubscriberRepository;
use smartbusflow::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use smartbusflow::infrastructure::db::{PgPool, connect_pool, migrate};

async fn pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty())?;
    let pool = connect_pool(&url).await.unwrap();
    migrate(&pool).await.unwrap();
    Some(pool)
}

fn unique_email(tag: &str) -> String {
    format!("{tag}-{}@example.com", generate_session_token().to_lowercase())
}

#[tokio::test]
async fn duplicate_subscriber_maps_to_duplicate_key() {
    let Some(pool) = pool().await else { return };
    let repo = SqlxSubscriberRepository::new(pool);
    let email = unique_email("dup");

    repo.create_subscriber(&email).await.unwrap();
    let again = repo.create_subscriber(&email).await;
    assert!(matches!(again, Err(StoreError::DuplicateKey)));

    let rows = repo
        .list_subscribers()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.email == email)
        .count();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn duplicate_user_email_maps_to_duplicate_key() {
    let Some(pool) = pool().await else { return };
    let repo = SqlxUserRepository::new(pool);
    let email = unique_email("user");

    let created = repo.create_user("Asha", &email, "hash", false).await.unwrap();
    assert!(!created.is_admin);
    let again = repo.create_user("Other", &email, "hash2", true).await;
    assert!(matches!(again, Err(StoreError::DuplicateKey)));

    let stored = repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.name, "Asha");
    assert!(repo.update_password_hash(created.id, "rotated").await.unwrap());
    let rotated = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(rotated.password_hash, "rotated");
}

#[tokio::test]
async fn listings_are_newest_first() {
    let Some(pool) = pool().await else { return };
    let subscribers = SqlxSubscriberRepository::new(pool.clone());
    let first = unique_email("first");
    let second = unique_email("second");
    subscribers.create_subscriber(&first).await.unwrap();
    subscribers.create_subscriber(&second).await.unwrap();

    let ours: Vec<String> = subscribers
        .list_subscribers()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.email)
        .filter(|e| *e == first || *e == second)
        .collect();
    assert_eq!(ours, [second, first]);

    let messages = SqlxContactMessageRepository::new(pool);
    let sender = unique_email("sender");
    let older = messages.create_message("A", &sender, "older").await.unwrap();
    let newer = messages.create_message("B", &sender, "").await.unwrap();
    let ids: Vec<i64> = messages
        .list_messages()
        .await
        .unwrap()
        .into_iter()
        .filter(|m| m.email == sender)
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, [newer.id, older.id]);
}
