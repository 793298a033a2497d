//! Header Component
//!
//! Title of the current page and the signed-in admin.

use console_core::session::SessionStore;
use console_core::ConsoleApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, use_request_scope};
use crate::session::BrowserSession;
use crate::store::ConsoleStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let admin = ctx.store.admin();

    // Cached login blob first, then the profile endpoint
    Effect::new(move |_| {
        if admin.get_untracked().is_some() {
            return;
        }
        if let Some(cached) = BrowserSession.cached_user() {
            admin.set(Some(cached));
        }
        spawn_local(async move {
            let fetched = ctx
                .run(scope, |api| async move { api.current_user().await })
                .await;
            match fetched {
                Some(Ok(user)) => admin.set(Some(user)),
                Some(Err(e)) => log::warn!("[HEADER] failed to load admin profile: {}", e),
                None => {}
            }
        });
    });

    view! {
        <header class="console-header">
            <h1 class="page-title">{move || ctx.route.get().label()}</h1>
            <div class="admin-badge">
                <span class="admin-avatar">
                    {move || admin.get().map(|u| u.initials()).unwrap_or_else(|| "A".to_string())}
                </span>
                <span class="admin-name">
                    {move || admin.get().map(|u| u.display_name()).unwrap_or_default()}
                </span>
            </div>
        </header>
    }
}
