//! localStorage-backed session

use console_core::session::{SessionStore, TOKEN_KEY, USER_KEY};
use web_sys::Storage;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Token and user blob in the browser's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn user_blob(&self) -> Option<String> {
        storage()?.get_item(USER_KEY).ok().flatten()
    }

    fn store(&self, token: &str, user_blob: &str) {
        let Some(storage) = storage() else {
            log::warn!("[SESSION] local storage unavailable, session not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() || storage.set_item(USER_KEY, user_blob).is_err() {
            log::warn!("[SESSION] failed to persist session");
        }
    }

    fn clear(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
