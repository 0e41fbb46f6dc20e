use crate::domain::accounts::user::User;
use crate::domain::contact::contact_message::ContactMessage;
use crate::domain::newsletter::subscriber::Subscriber;

/// User row as shown to admins; never carries the password hash.
#[derive(Debug, Clone)]
pub struct UserSummaryDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserSummaryDto {
    fn from(u: User) -> Self {
        UserSummaryDto {
            id: u.id,
            name: u.name,
            email: u.email,
            is_admin: u.is_admin,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardDto {
    pub users: Vec<UserSummaryDto>,
    pub subscribers: Vec<Subscriber>,
    pub messages: Vec<ContactMessage>,
}
