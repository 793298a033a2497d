//! Session State
//!
//! The bearer token and cached user blob live in durable storage. They are
//! written once per login and cleared on logout; guards and the HTTP client
//! only ever read them. The browser implementation lives in the UI crate.

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::LoginSession;
use crate::domain::AdminUser;

pub const TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

pub trait SessionStore {
    fn token(&self) -> Option<String>;

    fn user_blob(&self) -> Option<String>;

    fn store(&self, token: &str, user_blob: &str);

    fn clear(&self);

    /// Presence check only: freshness and signature are the backend's job
    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Start a session after a successful login
    fn begin(&self, login: &LoginSession) {
        self.store(&login.access_token, &login.user.to_string());
    }

    /// User cached at login, if the blob carries one
    fn cached_user(&self) -> Option<AdminUser> {
        let blob: serde_json::Value = serde_json::from_str(&self.user_blob()?).ok()?;
        let user = blob.get("user").cloned().unwrap_or(blob);
        serde_json::from_value(user).ok()
    }
}

#[derive(Debug, Default)]
struct Stored {
    token: Option<String>,
    user: Option<String>,
}

/// In-memory store; clones share the same session
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    inner: Arc<Mutex<Stored>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let session = Self::new();
        session.store(token, "{}");
        session
    }

    fn with_stored<T>(&self, f: impl FnOnce(&mut Stored) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.with_stored(|s| s.token.clone())
    }

    fn user_blob(&self) -> Option<String> {
        self.with_stored(|s| s.user.clone())
    }

    fn store(&self, token: &str, user_blob: &str) {
        self.with_stored(|s| {
            s.token = Some(token.to_string());
            s.user = Some(user_blob.to_string());
        });
    }

    fn clear(&self) {
        self.with_stored(|s| *s = Stored::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_begin_and_clear() {
        let session = MemorySession::new();
        assert!(!session.is_authenticated());

        session.begin(&LoginSession {
            access_token: "tok".into(),
            user: json!({"access_token": "tok", "user": {"first_name": "Nayan", "last_name": "Dangar", "email": "n@d.in"}}),
        });
        assert!(session.is_authenticated());
        assert_eq!(session.cached_user().unwrap().initials(), "ND");

        let shared = session.clone();
        shared.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.cached_user(), None);
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let session = MemorySession::with_token("");
        assert!(!session.is_authenticated());
    }
}
