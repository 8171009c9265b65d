//! Console Logger
//!
//! `log` backend for the browser. Records go to the matching `console`
//! method (stderr off-wasm) and the latest ones are kept in a circular
//! buffer so they can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept in the circular buffer by default
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.into(),
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Buffered lines joined under a header, `None` when nothing is buffered
    pub fn report(&self) -> Option<String> {
        let lines = self.snapshot();
        (!lines.is_empty()).then(|| format!("recent log ({} lines):\n{}", lines.len(), lines.join("\n")))
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{} [{}] {} {}: {}",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            self.app_name,
            record.level(),
            record.target(),
            record.args()
        )
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut buf = match self.buffer.lock() {
            Ok(buf) => buf,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buf.len() >= self.capacity {
            buf.pop_front();
        }
        buf.push_back(line);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Report of the global logger's buffer, for attaching to panic output
pub fn recent_report() -> Option<String> {
    LOGGER.get().and_then(ConsoleLogger::report)
}

/// Parse a level name such as `"warn"`, case-insensitively
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}
