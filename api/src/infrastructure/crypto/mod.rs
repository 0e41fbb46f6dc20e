use base64::Engine as _;
use rand::RngCore;

const SESSION_TOKEN_BYTES: usize = 32;

/// Opaque, URL-safe session identifier backed by the OS-seeded thread RNG.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
