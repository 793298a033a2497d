//! Restaurant Admin Console Entry Point

mod api;
mod app;
mod components;
mod context;
mod layout;
mod logging;
mod pages;
mod router;
mod session;
mod store;

use app::App;
use console_core::ConsoleConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(ConsoleConfig::from_build_env().log_level());
    mount_to_body(App);
}
