use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::contact_message_repository::ContactMessageRepository;
use crate::domain::contact::contact_message::ContactMessage;
use crate::infrastructure::db::PgPool;

pub struct SqlxContactMessageRepository {
    pub pool: PgPool,
}

impl SqlxContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepository {
    async fn create_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> anyhow::Result<ContactMessage> {
        let row = sqlx::query(
            r#"INSERT INTO contact_messages (name, email, message) VALUES ($1, $2, $3)
               RETURNING id, name, email, message, created_at"#,
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;
        Ok(ContactMessage {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            message: row.get("message"),
            created_at: row.get("created_at"),
        })
    }

    async fn list_messages(&self) -> anyhow::Result<Vec<ContactMessage>> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, message, created_at
               FROM contact_messages ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| ContactMessage {
                id: r.get("id"),
                name: r.get("name"),
                email: r.get("email"),
                message: r.get("message"),
                created_at: r.get("created_at"),
            })
            .collect())
    }
}
