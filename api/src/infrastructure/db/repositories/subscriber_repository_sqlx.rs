use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::store_error::StoreError;
use crate::application::ports::subscriber_repository::SubscriberRepository;
use crate::domain::newsletter::subscriber::Subscriber;
use crate::infrastructure::db::{PgPool, classify_insert_error};

pub struct SqlxSubscriberRepository {
    pub pool: PgPool,
}

impl SqlxSubscriberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberRepository for SqlxSubscriberRepository {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber, StoreError> {
        let row = sqlx::query(
            r#"INSERT INTO subscribers (email) VALUES ($1) RETURNING id, email, created_at"#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;
        Ok(Subscriber {
            id: row.get("id"),
            email: row.get("email"),
            created_at: row.get("created_at"),
        })
    }

    async fn list_subscribers(&self) -> anyhow::Result<Vec<Subscriber>> {
        let rows = sqlx::query(
            r#"SELECT id, email, created_at FROM subscribers ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Subscriber {
                id: r.get("id"),
                email: r.get("email"),
                created_at: r.get("created_at"),
            })
            .collect())
    }
}
