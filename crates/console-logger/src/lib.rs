//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the matching
//! `console.*` method so the browser devtools level filter works.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
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
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// `LEVEL target: message`
fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_includes_level_and_target() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("recipe_ui::api")
                .args(format_args!("[API] {} failed", "GET /api/recipe"))
                .build(),
        );
        assert_eq!(line, "WARN  recipe_ui::api: [API] GET /api/recipe failed");
    }

    #[test]
    fn test_format_record_pads_short_levels() {
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("app")
                .args(format_args!("ready"))
                .build(),
        );
        assert_eq!(line, "INFO  app: ready");
    }
}
