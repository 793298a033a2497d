//! Toast Host Component
//!
//! Renders the notification queue; each toast removes itself when its
//! timer runs out.

use console_core::notify::Toast;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss, use_console_store, ConsoleStateStoreFields};

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let store = use_console_store();
    let id = toast.id;
    let duration_ms = toast.duration_ms;

    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        store_dismiss(&store, id);
    });

    view! {
        <div class={toast.severity.class()} role="status">
            <span class="toast-text">{toast.text}</span>
            <button class="toast-close" on:click=move |_| store_dismiss(&store, id)>"×"</button>
        </div>
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_console_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.notifier().read().active().to_vec()
                key=|toast| toast.id
                children=|toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}
