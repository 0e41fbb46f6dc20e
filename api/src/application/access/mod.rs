use crate::domain::accounts::user::User;

/// What the session layer needs to know about an account.
pub trait Authenticatable {
    fn principal_id(&self) -> i64;
    fn display_name(&self) -> &str;
    fn is_admin(&self) -> bool;
}

/// Adapter exposing a plain `User` record as an `Authenticatable`.
pub struct SessionUser<'a>(pub &'a User);

impl Authenticatable for SessionUser<'_> {
    fn principal_id(&self) -> i64 {
        self.0.id
    }

    fn display_name(&self) -> &str {
        &self.0.name
    }

    fn is_admin(&self) -> bool {
        self.0.is_admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub name: String,
    pub is_admin: bool,
}

impl Principal {
    pub fn from_authenticatable<A: Authenticatable + ?Sized>(account: &A) -> Self {
        Self {
            user_id: account.principal_id(),
            name: account.display_name().to_string(),
            is_admin: account.is_admin(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("authentication required")]
    Unauthorized,
    #[error("admin privileges required")]
    Forbidden,
}

// Presentation decides how each failure is surfaced (login redirect vs 403).

pub fn require_authenticated(principal: Option<&Principal>) -> Result<&Principal, AccessError> {
    principal.ok_or(AccessError::Unauthorized)
}

pub fn require_admin(principal: &Principal) -> Result<(), AccessError> {
    if principal.is_admin {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}
