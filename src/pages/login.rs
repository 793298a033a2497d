//! Login Page
//!
//! Super-admin sign in by email and password.

use console_core::auth;
use console_core::guards::Route;
use console_core::session::SessionStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth_card::{form_error, AuthCard};
use crate::context::use_app_context;
use crate::session::BrowserSession;
use crate::store::ConsoleStateStoreFields;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();

        spawn_local(async move {
            let api = ctx.api();
            let result = auth::sign_in(&api, &BrowserSession, &email, &password).await;
            set_loading.try_set(false);
            match result {
                Ok(_) => {
                    ctx.store.admin().set(BrowserSession.cached_user());
                    ctx.success("Login successful!");
                    ctx.navigate(Route::Dashboard);
                }
                Err(message) => {
                    set_error.try_set(Some(message));
                }
            }
        });
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Sign in to the admin console">
            <form class="auth-form" on:submit=submit>
                <label>"Email"</label>
                <input
                    type="email"
                    placeholder="admin@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        set_email.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                />
                <label>"Password"</label>
                <div class="password-field">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                {form_error(error)}
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <a
                class="auth-link"
                href={Route::ForgotPassword.path()}
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::ForgotPassword);
                }
            >
                "Forgot password?"
            </a>
        </AuthCard>
    }
}
