//! Console Core
//!
//! Everything the restaurant admin console decides without a browser:
//! domain records, validation, form drafts, the add/edit wizard, table
//! state, route guards and the REST client.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod expansion;
pub mod forms;
pub mod guards;
pub mod listing;
pub mod notify;
pub mod scope;
pub mod session;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod scenarios;

pub use api::{ConsoleApi, HttpConsoleApi};
pub use config::ConsoleConfig;
pub use error::{ApiError, ApiResult};
