//! Global Console State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use console_core::auth::RecoverySession;
use console_core::domain::AdminUser;
use console_core::notify::{Notice, Notifier};
use console_core::ConsoleConfig;
use leptos::prelude::*;
use reactive_stores::Store;

/// Console-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ConsoleState {
    /// Toasts currently on screen
    pub notifier: Notifier,
    /// Signed-in administrator shown in the header
    pub admin: Option<AdminUser>,
    /// Carried from forgot-password through reset-password
    pub recovery: Option<RecoverySession>,
}

impl ConsoleState {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            notifier: Notifier::new(config.toast_duration_ms),
            ..Default::default()
        }
    }
}

pub type ConsoleStore = Store<ConsoleState>;

pub fn use_console_store() -> ConsoleStore {
    expect_context::<ConsoleStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_notify(store: &ConsoleStore, notice: Notice) {
    store.notifier().write().post(notice);
}

pub fn store_dismiss(store: &ConsoleStore, toast_id: u64) {
    store.notifier().write().dismiss(toast_id);
}

/// Forget everything tied to the signed-in admin
pub fn store_sign_out(store: &ConsoleStore) {
    store.admin().set(None);
    store.recovery().set(None);
}
