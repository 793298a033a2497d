//! Application Context
//!
//! Shared state provided via Leptos Context API: the current route, the
//! build configuration and the console store, plus the request helpers
//! every page goes through.

use std::future::Future;

use console_core::guards::Route;
use console_core::notify::Notice;
use console_core::scope::RequestScope;
use console_core::session::SessionStore;
use console_core::{ApiError, ApiResult, ConsoleConfig};
use leptos::prelude::*;

use crate::api::{self, Api};
use crate::router;
use crate::session::BrowserSession;
use crate::store::{store_notify, store_sign_out, ConsoleStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being rendered - read
    pub route: ReadSignal<Route>,
    /// Page being rendered - write
    set_route: WriteSignal<Route>,
    config: StoredValue<ConsoleConfig>,
    pub store: ConsoleStore,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        config: ConsoleConfig,
        store: ConsoleStore,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
            store,
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> Api {
        api::client(self.config())
    }

    /// Navigate, honouring the route guards
    pub fn navigate(&self, target: Route) {
        self.set_route.set(router::push(target));
    }

    pub fn notify(&self, notice: Notice) {
        store_notify(&self.store, notice);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(Notice::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(Notice::error(text));
    }

    /// The backend rejected our token: drop the session and start over
    pub fn expire_session(&self) {
        log::warn!("[AUTH] session rejected by backend");
        BrowserSession.clear();
        store_sign_out(&self.store);
        self.error("Session expired. Please sign in again.");
        self.navigate(Route::Login);
    }

    /// Run a request inside `scope`. `None` when the view was torn down or
    /// the session expired; everything else is handed back.
    pub async fn run<T, F, Fut>(&self, scope: StoredValue<RequestScope>, request: F) -> Option<ApiResult<T>>
    where
        F: FnOnce(Api) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let scope = scope.try_get_value()?;
        match scope.run(request(self.api())).await {
            Err(ApiError::Aborted) => None,
            Err(e) if e.is_unauthorized() => {
                self.expire_session();
                None
            }
            result => Some(result),
        }
    }

    /// Like `run`, but failures become an error toast
    pub async fn call<T, F, Fut>(&self, scope: StoredValue<RequestScope>, fallback: &str, request: F) -> Option<T>
    where
        F: FnOnce(Api) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        match self.run(scope, request).await? {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[API] {}: {}", fallback, e);
                self.error(e.user_message(fallback));
                None
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Request scope of the calling component, cancelled when it unmounts
pub fn use_request_scope() -> StoredValue<RequestScope> {
    let scope = RequestScope::new();
    let on_unmount = scope.clone();
    on_cleanup(move || on_unmount.cancel_all());
    StoredValue::new(scope)
}
