//! Backend client wiring

use console_core::{ConsoleConfig, HttpConsoleApi};

use crate::session::BrowserSession;

pub type Api = HttpConsoleApi<BrowserSession>;

/// Client bound to the browser session. The fetch backend keeps no
/// connection pool, so one per request is fine.
pub fn client(config: ConsoleConfig) -> Api {
    HttpConsoleApi::new(config, BrowserSession)
}
