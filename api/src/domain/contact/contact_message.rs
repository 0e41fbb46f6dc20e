/// A message left through the public contact form. The sender email is
/// stored as given; nothing checks its format.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
