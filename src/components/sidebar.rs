//! Sidebar Navigation Component
//!
//! Console navigation plus logout.

use console_core::auth;
use console_core::guards::Route;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::BrowserSession;
use crate::store::store_sign_out;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let logout = move |_| {
        auth::sign_out(&BrowserSession);
        store_sign_out(&ctx.store);
        ctx.success("Logged out successfully");
        ctx.navigate(Route::Login);
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Resto Admin"</div>
            <nav class="sidebar-nav">
                {Route::NAV.into_iter().map(|item| {
                    let link_class = move || {
                        if ctx.route.get() == item { "nav-link active" } else { "nav-link" }
                    };
                    view! {
                        <a
                            class=link_class
                            href={item.path()}
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(item);
                            }
                        >
                            {item.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>
            <button class="logout-btn" on:click=logout>"Logout"</button>
        </aside>
    }
}
