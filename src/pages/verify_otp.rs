//! Verify OTP Page
//!
//! Six-digit code entry with a resend cooldown.

use console_core::auth::{self, OtpCountdown};
use console_core::guards::Route;
use console_core::validation::OTP_LENGTH;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth_card::{form_error, AuthCard};
use crate::context::use_app_context;
use crate::store::ConsoleStateStoreFields;

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let ctx = use_app_context();
    let recovery = ctx.store.recovery();
    let resend_secs = ctx.config().otp_resend_secs;

    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let countdown = RwSignal::new(OtpCountdown::start(resend_secs));

    // Nothing to verify without an OTP session
    Effect::new(move |_| {
        if recovery.get_untracked().and_then(|r| r.otp_id).is_none() {
            ctx.error("Please request an OTP first");
            ctx.navigate(Route::ForgotPassword);
        }
    });

    // Stops on its own once the page is gone
    let run_countdown = move || {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                match countdown.try_update(|c| c.tick()) {
                    Some(0) | None => break,
                    Some(_) => {}
                }
            }
        });
    };
    run_countdown();

    let verify = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);
        let entered = code.get_untracked();

        spawn_local(async move {
            let api = ctx.api();
            let mut session = recovery.get_untracked().unwrap_or_default();
            let result = auth::verify_otp(&api, &mut session, &entered).await;
            set_loading.try_set(false);
            match result {
                Ok(message) => {
                    recovery.set(Some(session));
                    ctx.success(message);
                    ctx.navigate(Route::ResetPassword);
                }
                Err(message) => {
                    set_error.try_set(Some(message));
                }
            }
        });
    };

    let resend = move |_| {
        if !countdown.get_untracked().can_resend() {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            let api = ctx.api();
            let mut session = recovery.get_untracked().unwrap_or_default();
            match auth::resend_otp(&api, &mut session).await {
                Ok(message) => {
                    recovery.set(Some(session));
                    set_code.try_set(String::new());
                    ctx.success(message);
                    // `try_set` hands the value back once the page is gone
                    if countdown.try_set(OtpCountdown::start(resend_secs)).is_none() {
                        run_countdown();
                    }
                }
                Err(message) => {
                    set_error.try_set(Some(message.clone()));
                    ctx.error(message);
                }
            }
        });
    };

    let subtitle = move || {
        recovery
            .get_untracked()
            .map(|r| format!("Enter the code sent to {}", r.email))
            .unwrap_or_default()
    };

    view! {
        <AuthCard title="Verify OTP" subtitle={subtitle()}>
            <form class="auth-form" on:submit=verify>
                <input
                    class="otp-input"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength={OTP_LENGTH.to_string()}
                    placeholder="••••••"
                    prop:value=move || code.get()
                    on:input=move |ev| {
                        let digits: String = event_target_value(&ev)
                            .chars()
                            .filter(char::is_ascii_digit)
                            .take(OTP_LENGTH)
                            .collect();
                        set_code.set(digits);
                        set_error.set(None);
                    }
                />
                {form_error(error)}
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || loading.get() || code.get().len() != OTP_LENGTH
                >
                    {move || if loading.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>
            <div class="otp-resend">
                {move || {
                    let state = countdown.get();
                    if state.can_resend() {
                        view! { <button class="link-btn" on:click=resend>"Resend OTP"</button> }.into_any()
                    } else {
                        view! { <span class="muted">{format!("Resend OTP in {}s", state.remaining())}</span> }.into_any()
                    }
                }}
            </div>
        </AuthCard>
    }
}
