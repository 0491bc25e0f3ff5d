//! One-shot flash messages.
//!
//! Messages queued while handling a form submission are stored in a
//! signed cookie and consumed by the next page view.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};

/// Cookie holding pending flash messages.
pub const FLASH_COOKIE: &str = "lentille_flash";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

/// A message shown once on the next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

// JSON is not a valid cookie value, so it travels base64url-encoded.
fn encode(messages: &[FlashMessage]) -> String {
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

fn decode(value: &str) -> Vec<FlashMessage> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

fn pending(jar: &SignedCookieJar) -> Vec<FlashMessage> {
    jar.get(FLASH_COOKIE)
        .map(|c| decode(c.value()))
        .unwrap_or_default()
}

/// Queue a message for the next page view.
///
/// `secure` marks the cookie `Secure`, like the session cookie.
pub fn push(
    jar: SignedCookieJar,
    level: FlashLevel,
    message: impl Into<String>,
    secure: bool,
) -> SignedCookieJar {
    let mut messages = pending(&jar);
    messages.push(FlashMessage::new(level, message));

    let cookie = Cookie::build((FLASH_COOKIE, encode(&messages)))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Take every pending message, clearing the cookie.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<FlashMessage>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }
    let messages = pending(&jar);
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn empty_jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::generate())
    }

    #[test]
    fn test_encode_decode() {
        let messages = vec![
            FlashMessage::new(FlashLevel::Success, "Connexion réussie."),
            FlashMessage::new(FlashLevel::Error, "Mot de passe incorrect; \"guillemets\""),
        ];
        let encoded = encode(&messages);
        assert!(!encoded.contains('"'));
        assert!(!encoded.contains(';'));
        assert_eq!(decode(&encoded), messages);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode("%%%").is_empty());
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_push_then_take() {
        let jar = push(empty_jar(), FlashLevel::Info, "un", false);
        let jar = push(jar, FlashLevel::Error, "deux", false);

        let (jar, messages) = take(jar);
        assert_eq!(
            messages.iter().map(|m| m.message.as_str()).collect::<Vec<_>>(),
            vec!["un", "deux"]
        );
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_secure_flag() {
        let jar = push(empty_jar(), FlashLevel::Info, "https", true);
        assert_eq!(jar.get(FLASH_COOKIE).and_then(|c| c.secure()), Some(true));

        let jar = push(empty_jar(), FlashLevel::Info, "http", false);
        assert_ne!(jar.get(FLASH_COOKIE).and_then(|c| c.secure()), Some(true));
    }

    #[test]
    fn test_take_without_messages() {
        let (_, messages) = take(empty_jar());
        assert!(messages.is_empty());
    }
}
