//! Reset Password Page

use console_core::auth::{self, ResetFailure};
use console_core::guards::Route;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth_card::{form_error, AuthCard};
use crate::context::use_app_context;
use crate::store::ConsoleStateStoreFields;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let recovery = ctx.store.recovery();
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);
        let (new_password, confirm) = (password.get_untracked(), confirmation.get_untracked());

        spawn_local(async move {
            let api = ctx.api();
            let session = recovery.get_untracked();
            let result = auth::reset_password(&api, session.as_ref(), &new_password, &confirm).await;
            set_loading.try_set(false);
            match result {
                Ok(message) => {
                    recovery.set(None);
                    ctx.success(message);
                    TimeoutFuture::new(2_000).await;
                    ctx.navigate(Route::Login);
                }
                Err(failure @ ResetFailure::SessionExpired) => {
                    ctx.error(failure.message());
                    ctx.navigate(Route::ForgotPassword);
                }
                Err(failure) => {
                    set_error.try_set(Some(failure.message().to_string()));
                    ctx.error(failure.message());
                }
            }
        });
    };

    view! {
        <AuthCard title="Reset password" subtitle="Choose a new password">
            <form class="auth-form" on:submit=submit>
                <label>"New Password"</label>
                <input
                    type="password"
                    placeholder="Minimum 6 characters"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <label>"Confirm Password"</label>
                <input
                    type="password"
                    placeholder="Repeat the new password"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                />
                {form_error(error)}
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Resetting..." } else { "Reset Password" }}
                </button>
            </form>
        </AuthCard>
    }
}
