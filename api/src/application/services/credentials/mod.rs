use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::domain::accounts::user::User;

/// Argon2id with a fresh random salt, encoded as a PHC string.
pub fn hash_password(plaintext: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}

pub fn set_password(user: &mut User, plaintext: &str) -> anyhow::Result<()> {
    user.password_hash = hash_password(plaintext)?;
    Ok(())
}

/// Salt and parameters come from the stored PHC string; the digest
/// comparison inside argon2 is constant-time.
pub fn verify_password(user: &User, plaintext: &str) -> bool {
    let parsed = match PasswordHash::new(&user.password_hash) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(user_id = user.id, error = %err, "stored password hash is unreadable");
            return false;
        }
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}
