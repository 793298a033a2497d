//! History Router
//!
//! Maps `location.pathname` to a `Route` through the guards and keeps the
//! address bar in sync with the route signal.

use console_core::guards::{resolve, Navigation, Route};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::session::BrowserSession;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(route: Route, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
    };
    if let Err(e) = result {
        log::warn!("[ROUTER] history update failed: {:?}", e);
    }
}

/// Route for the current address; a guard redirect rewrites the address
fn settle_current() -> Route {
    match resolve(&current_path(), &BrowserSession) {
        Navigation::Render(route) => route,
        Navigation::Redirect(route) => {
            log::debug!("[ROUTER] redirect to {}", route.path());
            write_history(route, true);
            route
        }
    }
}

pub fn initial_route() -> Route {
    settle_current()
}

/// Push `target`, or wherever its guard sends us instead
pub fn push(target: Route) -> Route {
    let route = resolve(target.path(), &BrowserSession).route();
    if route != target {
        log::debug!("[ROUTER] {} redirected to {}", target.path(), route.path());
    }
    if current_path() != route.path() {
        write_history(route, false);
    }
    route
}

/// Follow back/forward buttons
pub fn listen_popstate(set_route: WriteSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let on_pop = Closure::<dyn FnMut()>::new(move || set_route.set(settle_current()));
    if window
        .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[ROUTER] could not listen for popstate");
    }
    // Lives as long as the page
    on_pop.forget();
}
