use crate::domain::logging::{LogEntry, LogLevel, Logger};

/// Logger that writes to the browser console on wasm32 and to stderr elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    #[cfg(target_arch = "wasm32")]
    fn write(entry: &LogEntry) {
        let formatted = wasm_bindgen::JsValue::from(entry.to_string());
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(entry: &LogEntry) {
        eprintln!("{entry}");
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        if cfg!(debug_assertions) { Self::new_development() } else { Self::new_production() }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if self.enabled(entry.level) {
            Self::write(&entry);
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}
