use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize console logging, plus JSON file logging when `log_dir` is set.
///
/// SECURITY: profile passwords never reach a log call; free text that may
/// carry credentials goes through [`sanitize_for_logging`].
///
/// # Returns
/// * `Some(WorkerGuard)` when file logging is active. Keep it alive for the
///   duration of the program or buffered lines are lost.
pub fn init_logging(log_dir: Option<&Path>, log_level: &str) -> Result<Option<WorkerGuard>> {
    let level = parse_level(log_level);

    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
                .rotation(tracing_appender::rolling::Rotation::DAILY)
                .filename_prefix("disaster-drive")
                .filename_suffix("log")
                .max_log_files(5)
                .build(dir)
                .context("Failed to create log file appender")?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized at level: {}", level);

    Ok(guard)
}

fn parse_level(log_level: &str) -> Level {
    match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

type Redaction = (Regex, &'static str);

fn redactions() -> &'static [Redaction] {
    static PATTERNS: OnceLock<Vec<Redaction>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"://([^:/@\s]+):([^@\s]+)@", "://$1:[REDACTED]@"),
            (r#"(?i)password["\s]*[:=]["\s]*[^",\s]+"#, "password=[REDACTED]"),
            (r#"(?i)token["\s]*[:=]["\s]*[^",\s]+"#, "token=[REDACTED]"),
            (r"Authorization:\s*(Bearer|Basic)\s+\S+", "Authorization: $1 [REDACTED]"),
            (r"[A-Za-z0-9+/]{32,}={0,2}", "[REDACTED_KEY]"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
    })
}

/// Mask credential-looking fragments before they are logged.
///
/// Patterns masked:
/// - Passwords embedded in URLs
/// - `password=` / `token=` fields
/// - Authorization headers
/// - Long base64-like runs (keys)
pub fn sanitize_for_logging(input: &str) -> String {
    redactions()
        .iter()
        .fold(input.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        })
}

/// Usage: `secure_info!("Config: {}", path.display());`
#[macro_export]
macro_rules! secure_info {
    ($($arg:tt)*) => {
        tracing::info!("{}", $crate::logging::sanitize_for_logging(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! secure_error {
    ($($arg:tt)*) => {
        tracing::error!("{}", $crate::logging::sanitize_for_logging(&format!($($arg)*)))
    };
}
