use log::{debug, error, info};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call installs the logger.
/// `RUST_LOG` overrides the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        let installed = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("dsmovie_lib", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_env("RUST_LOG")
            .format_timestamp_secs()
            .format_module_path(false)
            .try_init();

        if installed.is_ok() {
            info!("Logging system initialized");
        }
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

/// Log lines shared by the repositories and services
pub struct LogContext;

impl LogContext {
    /// One statement against `table`, with elapsed time when known
    pub fn db_operation(operation: &str, table: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(ms) => debug!("db {} {} ({}ms)", operation, table, ms),
            None => debug!("db {} {}", operation, table),
        }
    }

    /// Title search; `results` is `None` before the query runs
    pub fn search_operation(title: &str, results: Option<usize>) {
        match results {
            Some(count) => info!("Title search '{}' returned {} movies", title, count),
            None => debug!("Title search '{}'", title),
        }
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    pub fn performance_metric(operation: &str, duration_ms: u64, detail: Option<&str>) {
        match detail {
            Some(detail) => info!("{} took {}ms [{}]", operation, duration_ms, detail),
            None => info!("{} took {}ms", operation, duration_ms),
        }
    }
}

/// Measures an operation from construction until `finish_with_info`
pub struct TimedOperation {
    started: Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        debug!("{} started", operation);
        Self {
            started: Instant::now(),
            operation,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(self.operation, duration, Some(info));
        duration
    }
}
