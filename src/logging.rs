//! Browser Console Logger
//!
//! `log` records from the UI and from console-core end up in the devtools
//! console, prefixed with a timestamp.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stamp = String::from(js_sys::Date::new_0().to_iso_string());
        let line = JsValue::from(format!("{} {:<5} {}", stamp, record.level(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) {
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(level),
        Err(_) => web_sys::console::warn_1(&"[LOG] logger already installed".into()),
    }
}
