use derive_more::Display;
use std::fmt;
use std::sync::OnceLock;

/// Log levels with automatic Display implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

/// Log components with automatic Display implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

/// Structured log entry. Entries emitted while composing a frame carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub frame: Option<f64>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self { level, component, message: message.into(), frame: None }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frame {
            Some(frame) => {
                write!(f, "{} {} | frame {} | {}", self.level, self.component, frame, self.message)
            }
            None => write!(f, "{} {} | {}", self.level, self.component, self.message),
        }
    }
}

/// Sink for structured log entries
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Cheap pre-check so callers can skip formatting.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();

/// Install the process-wide logger. Returns `false` if one was already set.
pub fn init_logger(logger: Box<dyn Logger>) -> bool {
    GLOBAL_LOGGER.set(logger).is_ok()
}

/// Installed logger, or a sink that drops everything
pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Format and emit one entry if the global logger accepts `level`.
pub fn emit(level: LogLevel, component: LogComponent, frame: Option<f64>, message: fmt::Arguments<'_>) {
    let logger = get_logger();
    if logger.enabled(level) {
        logger.log(LogEntry { frame, ..LogEntry::new(level, component, message.to_string()) });
    }
}

// trace/debug/info vanish from release builds; the component is still
// evaluated so call sites compile identically.
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Trace, $component, None, format_args!($($arg)*));
        #[cfg(not(debug_assertions))]
        let _ = $component;
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, None, format_args!($($arg)*));
        #[cfg(not(debug_assertions))]
        let _ = $component;
    }};
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, None, format_args!($($arg)*));
        #[cfg(not(debug_assertions))]
        let _ = $component;
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, None, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, None, format_args!($($arg)*))
    };
}

/// Trace entry tagged with the frame being rendered.
#[macro_export]
macro_rules! log_frame {
    ($frame:expr, $component:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Trace,
            $component,
            Some($frame),
            format_args!($($arg)*),
        );
        #[cfg(not(debug_assertions))]
        let _ = ($frame, $component);
    }};
}
