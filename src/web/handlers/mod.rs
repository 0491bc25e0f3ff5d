//! Request handlers for the Lentille web layer.

pub mod auth;
pub mod catalog;
pub mod forum;
pub mod site;

pub use auth::*;
pub use catalog::*;
pub use forum::*;
pub use site::*;

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

use crate::auth::{MemorySessionStore, SessionStore};
use crate::web::flash::{self, FlashLevel};
use crate::config::{Config, SiteConfig};
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Session store.
    pub sessions: Arc<dyn SessionStore>,
    /// Site information and gallery.
    pub site: Arc<SiteConfig>,
    /// Name of the session cookie.
    pub cookie_name: String,
    /// Mark cookies `Secure`.
    pub secure_cookies: bool,
    cookie_key: Key,
}

impl AppState {
    /// Create a new application state around an explicit session store.
    pub fn new(db: Database, sessions: Arc<dyn SessionStore>, config: &Config) -> Self {
        Self {
            db,
            sessions,
            site: Arc::new(config.site.clone()),
            cookie_name: config.session.cookie_name.clone(),
            secure_cookies: config.web.secure_cookies,
            cookie_key: derive_key(&config.session.secret),
        }
    }

    /// Create a new application state with an in-memory session store.
    pub fn from_config(db: Database, config: &Config) -> Self {
        let sessions = Arc::new(MemorySessionStore::from_config(&config.session));
        Self::new(db, sessions, config)
    }

    /// Session token carried by the request, if any.
    pub fn session_token(&self, jar: &SignedCookieJar) -> Option<String> {
        jar.get(&self.cookie_name).map(|c| c.value().to_string())
    }

    /// Attach a session token to the response.
    pub fn set_session_cookie(&self, jar: SignedCookieJar, token: String) -> SignedCookieJar {
        let cookie = Cookie::build((self.cookie_name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(self.secure_cookies)
            .same_site(SameSite::Lax);
        jar.add(cookie)
    }

    /// Queue a flash message, with the same `Secure` flag as the session
    /// cookie.
    pub fn flash(
        &self,
        jar: SignedCookieJar,
        level: FlashLevel,
        message: impl Into<String>,
    ) -> SignedCookieJar {
        flash::push(jar, level, message, self.secure_cookies)
    }

    /// Close the session carried by the request, if any.
    pub fn end_session(&self, jar: &SignedCookieJar) {
        if let Some(token) = self.session_token(jar) {
            crate::auth::logout(&*self.sessions, &token);
        }
    }

    /// Remove the session cookie from the client.
    pub fn clear_session_cookie(&self, jar: SignedCookieJar) -> SignedCookieJar {
        jar.remove(Cookie::build(self.cookie_name.clone()).path("/"))
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Derive the 64-byte cookie signing key from the configured secret.
fn derive_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}
