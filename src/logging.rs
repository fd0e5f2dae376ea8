//! Structured logging and tracing for the weather kiosk
//!
//! Console output plus an optional daily-rolling log file, both driven by
//! the tracing ecosystem. Components log through [`StructuredLogger`] so
//! each event carries the component name and, for refresh cycles, the
//! cycle id.

use crate::config::LoggingConfig;
use crate::error::{KioskError, Result};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Once;
use tracing::{Level, Subscriber, debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Keep the non-blocking worker guard alive for the entire process lifetime
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();
static INIT_ONCE: Once = Once::new();
static INIT_ERROR: OnceCell<String> = OnceCell::new();

/// Initialize logging system based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    INIT_ONCE.call_once(|| {
        if let Err(e) = try_init(config) {
            let _ = INIT_ERROR.set(e.to_string());
        }
    });

    if let Some(err) = INIT_ERROR.get() {
        return Err(KioskError::config(err.clone()));
    }
    Ok(())
}

fn try_init(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("weather_kiosk={},tower_http=warn,reqwest=warn", level).into()
    });

    if should_use_console_only() {
        // try_init: a test harness may already have installed a subscriber
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer(std::io::stdout, config.json_format))
            .try_init();
        info!("Logging initialized - level: {}, console-only", level);
        return Ok(());
    }

    let file_appender = rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix("weather_kiosk")
        .filename_suffix("log")
        .max_log_files(config.backup_count.max(1) as usize)
        .build(log_dir(&config.file))
        .map_err(|e| KioskError::io(format!("Failed to create log file appender: {}", e)))?;
    let (non_blocking_appender, guard) = non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(non_blocking_appender, config.json_format))
        .with(
            config
                .console_output
                .then(|| fmt_layer(std::io::stdout, config.json_format)),
        )
        .try_init()
        .map_err(|e| KioskError::config(e.to_string()))?;

    info!(
        "Logging initialized - level: {}, file: {}",
        level, config.file
    );
    Ok(())
}

fn fmt_layer<S, W>(writer: W, json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// A path with an extension names a file; log next to it
fn log_dir(file: &str) -> &Path {
    let p = Path::new(file);
    if p.extension().is_some() {
        p.parent().unwrap_or(p)
    } else {
        p
    }
}

fn should_use_console_only() -> bool {
    cfg!(test) || std::env::var_os("KIOSK_DISABLE_FILE_LOG").is_some()
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_uppercase().as_str() {
        "TRACE" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" | "WARNING" => Ok(Level::WARN),
        "ERROR" => Ok(Level::ERROR),
        _ => Err(KioskError::config(format!(
            "Invalid log level: {}",
            level_str
        ))),
    }
}

/// Context information for log messages
#[derive(Debug, Clone)]
pub struct LogContext {
    /// Component name (e.g., "dashboard", "api", "web")
    pub component: String,

    /// Refresh cycle the events belong to
    pub cycle_id: Option<String>,
}

impl LogContext {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            cycle_id: None,
        }
    }

    pub fn with_cycle_id(mut self, cycle_id: String) -> Self {
        self.cycle_id = Some(cycle_id);
        self
    }
}

/// Structured logger with context
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    context: LogContext,
}

impl StructuredLogger {
    pub fn new(context: LogContext) -> Self {
        Self { context }
    }

    pub fn info(&self, message: &str) {
        let fields = self.format_fields();
        info!(%fields, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        let fields = self.format_fields();
        warn!(%fields, "{}", message);
    }

    pub fn error(&self, message: &str) {
        let fields = self.format_fields();
        error!(%fields, "{}", message);
    }

    pub fn debug(&self, message: &str) {
        let fields = self.format_fields();
        debug!(%fields, "{}", message);
    }

    fn format_fields(&self) -> String {
        match self.context.cycle_id.as_deref() {
            Some(cycle) => format!("component={},cycle={}", self.context.component, cycle),
            None => format!("component={}", self.context.component),
        }
    }
}

/// Create a logger for a specific component
pub fn get_logger(component: &str) -> StructuredLogger {
    StructuredLogger::new(LogContext::new(component))
}

/// Create a logger with full context
pub fn get_logger_with_context(context: LogContext) -> StructuredLogger {
    StructuredLogger::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_log_dir() {
        assert_eq!(log_dir("/var/log/kiosk.log"), Path::new("/var/log"));
        assert_eq!(log_dir("/var/log/kiosk"), Path::new("/var/log/kiosk"));
    }

    #[test]
    fn test_structured_logger_fields() {
        init_logging(&LoggingConfig::default()).ok();

        let logger = get_logger_with_context(
            LogContext::new("api").with_cycle_id("abc".to_string()),
        );
        assert_eq!(logger.format_fields(), "component=api,cycle=abc");
        assert_eq!(get_logger("web").format_fields(), "component=web");

        // These should not panic
        logger.info("info");
        logger.debug("debug");
        logger.warn("warn");
        logger.error("error");
    }
}
