//! Forgot Password Page
//!
//! Requests an OTP for the entered email and hands over to verification.

use console_core::auth;
use console_core::guards::Route;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth_card::AuthCard;
use crate::context::use_app_context;
use crate::store::ConsoleStateStoreFields;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        let email = email.get_untracked().trim().to_string();

        spawn_local(async move {
            let api = ctx.api();
            let result = auth::request_otp(&api, &email).await;
            set_loading.try_set(false);
            match result {
                Ok((recovery, message)) => {
                    ctx.store.recovery().set(Some(recovery));
                    ctx.success(message);
                    ctx.navigate(Route::VerifyOtp);
                }
                Err(message) => ctx.error(message),
            }
        });
    };

    view! {
        <AuthCard title="Forgot password" subtitle="We will email you a 6-digit code">
            <form class="auth-form" on:submit=submit>
                <label>"Email"</label>
                <input
                    type="email"
                    placeholder="admin@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Sending OTP..." } else { "Send OTP" }}
                </button>
            </form>
            <a
                class="auth-link"
                href={Route::Login.path()}
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::Login);
                }
            >
                "Back to login"
            </a>
        </AuthCard>
    }
}
