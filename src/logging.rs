use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Configuration for the logging system
///
/// The parser itself only emits `tracing` events; embedding binaries
/// and integration harnesses call [`init_logging`] to install a
/// subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (default: INFO)
    pub level: Level,
    /// Whether to emit json-formatted records (default: false)
    pub json_format: bool,
    /// Directory for log files. If None, logs only go to stdout
    pub log_dir: Option<String>,
    /// Whether to colorize terminal output (default: true)
    pub colorize: bool,
    /// Log file name used when log_dir is set
    pub log_file_name: String,
    /// Targets to filter on when RUST_LOG is not set
    pub log_targets: Option<Vec<String>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_dir: None,
            colorize: true,
            log_file_name: "gui-action-parser".to_string(),
            log_targets: Some(vec!["gui_action_parser".to_string()]),
        }
    }
}

/// Guard that keeps the file appender worker thread alive
///
/// Must be kept in scope for the duration of the program so buffered
/// records reach the file.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Initialization errors are swallowed so repeated calls (tests,
/// embedders that already installed a subscriber) are harmless.
pub fn init_logging(config: LoggingConfig) -> LogGuard {
    // Forward log-crate records to tracing
    let _ = LogTracer::init();

    let level_filter = match config.level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    };

    // RUST_LOG wins; otherwise build <target>=<level> pairs from config
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let filter_string = if let Some(targets) = &config.log_targets {
            targets
                .iter()
                .map(|target| format!("{}={}", target, level_filter))
                .collect::<Vec<_>>()
                .join(",")
        } else {
            format!("gui_action_parser={}", level_filter)
        };
        EnvFilter::new(filter_string)
    });

    let mut layers = Vec::new();

    let time_format = "%Y-%m-%d %H:%M:%S".to_string();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.colorize)
        .with_file(true)
        .with_line_number(true)
        .with_timer(ChronoUtc::new(time_format.clone()));

    let stdout_layer = if config.json_format {
        stdout_layer.json().flatten_event(true).boxed()
    } else {
        stdout_layer.boxed()
    };

    layers.push(stdout_layer);

    let mut file_guard = None;

    if let Some(log_dir) = &config.log_dir {
        let file_name = config.log_file_name.clone();
        let log_dir = PathBuf::from(log_dir);

        if !log_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&log_dir) {
                eprintln!("Failed to create log directory: {}", e);
                return LogGuard { _file_guard: None };
            }
        }

        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        file_guard = Some(guard);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::new(time_format))
            .with_writer(non_blocking);

        let file_layer = if config.json_format {
            file_layer.json().flatten_event(true).boxed()
        } else {
            file_layer.boxed()
        };

        layers.push(file_layer);
    }

    // try_init so an already-installed subscriber is not an error
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init();

    LogGuard {
        _file_guard: file_guard,
    }
}
