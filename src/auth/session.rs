//! Authentication sessions for Lentille.
//!
//! A session binds an opaque token to a user id. Sessions expire after an
//! absolute lifetime and after a period of inactivity.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::verify_password_blocking;
use crate::config::SessionConfig;
use crate::db::UserRepository;
use crate::{LentilleError, Result};

/// Default session duration (24 hours).
pub const DEFAULT_SESSION_DURATION_SECS: u64 = 24 * 60 * 60;

/// Default idle timeout (2 hours).
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 2 * 60 * 60;

/// Longest accepted session lifetime or idle timeout (1 year).
pub const MAX_SESSION_SECS: u64 = 365 * 24 * 60 * 60;

/// Authentication session representing a logged-in user.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Unique session token (UUID v4).
    pub token: String,
    /// User ID associated with this session.
    pub user_id: i64,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires (absolute timeout).
    pub expires_at: DateTime<Utc>,
    /// Last activity timestamp (for idle timeout).
    last_activity: Instant,
}

impl AuthSession {
    /// Create a new session with the default duration.
    pub fn new(user_id: i64) -> Self {
        Self::with_duration(user_id, Duration::from_secs(DEFAULT_SESSION_DURATION_SECS))
    }

    /// Create a new session with a custom duration.
    ///
    /// Durations longer than [`MAX_SESSION_SECS`] are capped.
    pub fn with_duration(user_id: i64, duration: Duration) -> Self {
        let now = Utc::now();
        let capped = duration.min(Duration::from_secs(MAX_SESSION_SECS));
        let expires_at = chrono::Duration::from_std(capped)
            .ok()
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            token: Uuid::new_v4().to_string(),
            user_id,
            created_at: now,
            expires_at,
            last_activity: Instant::now(),
        }
    }

    /// Check if the session has expired (absolute timeout).
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check if the session has been idle too long.
    pub fn is_idle(&self, idle_timeout: Duration) -> bool {
        self.last_activity.elapsed() >= idle_timeout
    }

    /// Check if the session is still valid (not expired and not idle).
    pub fn is_valid(&self, idle_timeout: Duration) -> bool {
        !self.is_expired() && !self.is_idle(idle_timeout)
    }

    /// Update the last activity timestamp.
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

/// Storage for authentication sessions, keyed by token.
///
/// Implementations must be shareable across request tasks.
pub trait SessionStore: Send + Sync {
    /// Lifetime given to new sessions.
    fn session_duration(&self) -> Duration;

    /// Look up a valid session and record activity on it.
    ///
    /// Expired or idle sessions are dropped and `None` is returned.
    fn get(&self, token: &str) -> Option<AuthSession>;

    /// Store a session under its token.
    fn set(&self, session: AuthSession);

    /// Remove a session. Returns whether one was present.
    fn clear(&self, token: &str) -> bool;

    /// Drop every expired or idle session. Returns how many were removed.
    fn cleanup(&self) -> usize;
}

/// In-process session store backed by a `HashMap`.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, AuthSession>>,
    duration: Duration,
    idle_timeout: Duration,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(DEFAULT_SESSION_DURATION_SECS),
            Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        )
    }
}

impl MemorySessionStore {
    /// Create a store with the given absolute lifetime and idle timeout.
    pub fn new(duration: Duration, idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            duration,
            idle_timeout,
        }
    }

    /// Create a store from the `[session]` configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            Duration::from_secs(config.duration_secs),
            Duration::from_secs(config.idle_timeout_secs),
        )
    }

    /// Number of stored sessions, valid or not.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, AuthSession>> {
        // A poisoned map is still structurally sound.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn session_duration(&self) -> Duration {
        self.duration
    }

    fn get(&self, token: &str) -> Option<AuthSession> {
        let mut sessions = self.lock();
        let valid = sessions.get(token)?.is_valid(self.idle_timeout);
        if !valid {
            sessions.remove(token);
            debug!(token = %token, "Session expired");
            return None;
        }
        let session = sessions.get_mut(token)?;
        session.touch();
        Some(session.clone())
    }

    fn set(&self, session: AuthSession) {
        self.lock().insert(session.token.clone(), session);
    }

    fn clear(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    fn cleanup(&self) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, s| s.is_valid(self.idle_timeout));
        before - sessions.len()
    }
}

/// Verify credentials and open a session.
///
/// Returns the new session token. Fails with `NotFound` for an unknown
/// username and `InvalidCredentials` for a wrong password.
pub async fn login(
    repo: &UserRepository<'_>,
    store: &dyn SessionStore,
    username: &str,
    password: &str,
) -> Result<String> {
    let user = match repo.get_by_username(username).await? {
        Some(user) => user,
        None => {
            warn!(username = %username, "Login failed: user not found");
            return Err(LentilleError::NotFound("user".to_string()));
        }
    };

    if let Err(e) = verify_password_blocking(password, &user.password).await {
        warn!(username = %username, "Login failed: wrong password");
        return Err(e.into());
    }

    let token = start_session(store, user.id);
    info!(username = %username, user_id = user.id, "Login successful");
    Ok(token)
}

/// Open a session for an already authenticated user and return its token.
pub fn start_session(store: &dyn SessionStore, user_id: i64) -> String {
    let session = AuthSession::with_duration(user_id, store.session_duration());
    let token = session.token.clone();
    store.set(session);
    token
}

/// Close the session bound to `token`, if any.
pub fn logout(store: &dyn SessionStore, token: &str) {
    if store.clear(token) {
        info!(token = %token, "Session logged out");
    } else {
        debug!(token = %token, "Logout: session not found");
    }
}

/// Resolve the user bound to a session token.
///
/// Fails with `Unauthenticated` when no token is given or the session is
/// unknown, expired or idle.
pub fn require_authenticated(store: &dyn SessionStore, token: Option<&str>) -> Result<i64> {
    token
        .and_then(|t| store.get(t))
        .map(|s| s.user_id)
        .ok_or(LentilleError::Unauthenticated)
}
