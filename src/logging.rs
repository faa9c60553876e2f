use crate::error::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    Layer, Registry,
};

#[derive(Debug)]
pub struct LoggerConfig {
    pub directory: String,
    pub file_name: String,
    pub rotation: Rotation,
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "tabscrape.log".to_string(),
            rotation: Rotation::DAILY,
            level: Level::INFO,
        }
    }
}

/// Installs a global subscriber writing to both a rolling log file and stdout.
///
/// Opt-in: the library itself only emits `tracing` events and works fine under
/// any subscriber the caller already has. Calling this twice fails, as does
/// calling it after another subscriber was set.
pub fn init_logging(config: LoggerConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)?;

    let file_appender =
        RollingFileAppender::new(config.rotation, config.directory, config.file_name);

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::FULL)
        .with_writer(file_appender)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_filter(tracing::level_filters::LevelFilter::from_level(
            config.level,
        ));

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_filter(tracing::level_filters::LevelFilter::from_level(
            config.level,
        ));

    let subscriber = Registry::default().with(file_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        std::io::Error::other(format!("Failed to set global subscriber: {}", e))
    })?;

    Ok(())
}

pub fn parse_log_level(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
