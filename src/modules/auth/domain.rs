use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;

pub use crate::modules::store::records::{Role, User};

/// An authenticated identity as the client holds it: the opaque token
/// plus the full user record behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Mints the session token: base64 over `"{user_id}-{unix_millis}"`.
///
/// The token is deliberately unsigned and the backing store never checks
/// it. Session integrity is client-trust only; anyone able to write the
/// local session storage can assert any identity. Known weakness, kept
/// as designed.
pub fn mint_token(user_id: &str) -> String {
    STANDARD.encode(format!("{}-{}", user_id, Utc::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_embeds_user_id_and_timestamp() {
        let token = mint_token("u-42");
        let decoded = STANDARD.decode(&token).unwrap();
        let decoded = String::from_utf8(decoded).unwrap();

        let (id, millis) = decoded.rsplit_once('-').unwrap();
        assert_eq!(id, "u-42");
        assert!(millis.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn test_tokens_are_opaque_strings() {
        let token = mint_token("u-1");
        assert!(!token.contains("u-1"));
        assert!(!token.is_empty());
    }
}
