//! Restaurant Admin Console App
//!
//! Root component: provides context, picks the page for the current route
//! and hosts the toast surface.

use console_core::guards::Route;
use console_core::ConsoleConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ToastHost;
use crate::context::AppContext;
use crate::layout::ConsoleLayout;
use crate::pages::{
    AnalyticsPage, DashboardPage, ForgotPasswordPage, LoginPage, ResetPasswordPage, RestaurantsPage,
    SettingsPage, UsersPage, VerifyOtpPage,
};
use crate::router;
use crate::store::ConsoleState;

#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_build_env();
    log::info!("[APP] console starting against {}", config.api_base_url);

    let store = Store::new(ConsoleState::new(&config));
    let (route, set_route) = signal(router::initial_route());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((route, set_route), config, store));
    router::listen_popstate(set_route);

    view! {
        <ToastHost />
        {move || {
            let current = route.get();
            log::debug!("[APP] rendering {}", current.path());
            match current {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
                Route::VerifyOtp => view! { <VerifyOtpPage /> }.into_any(),
                Route::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
                protected => view! {
                    <ConsoleLayout>
                        {match protected {
                            Route::Restaurants => view! { <RestaurantsPage /> }.into_any(),
                            Route::Users => view! { <UsersPage /> }.into_any(),
                            Route::Analytics => view! { <AnalyticsPage /> }.into_any(),
                            Route::Settings => view! { <SettingsPage /> }.into_any(),
                            _ => view! { <DashboardPage /> }.into_any(),
                        }}
                    </ConsoleLayout>
                }.into_any(),
            }
        }}
    }
}
