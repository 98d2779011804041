//! Logging configuration using tracing

use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "P42_LOG";

/// File name of the rolling log file
pub const LOG_FILE_NAME: &str = "p42-widgets.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/p42-widgets/logs/`
/// Log level is controlled by the `P42_LOG` environment variable.
///
/// Hosts call this once at startup; the widget crates only emit events.
///
/// # Examples
/// ```bash
/// P42_LOG=debug cargo run
/// P42_LOG=p42_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via P42_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("p42=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("P42 widgets logging started");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("p42-widgets").join("logs"))
}

/// Get the log file path for the current day
///
/// Daily rotation suffixes the file name with the UTC date.
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(dated_log_file_name(Utc::now().date_naive())))
}

fn dated_log_file_name(day: NaiveDate) -> String {
    format!("{}.{}", LOG_FILE_NAME, day.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_widgets_dir() {
        let path = get_current_log_file().unwrap();
        assert!(path.parent().unwrap().ends_with("p42-widgets/logs"));
    }

    #[test]
    fn test_current_log_file_carries_the_date() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(dated_log_file_name(day), "p42-widgets.log.2026-03-07");

        let path = get_current_log_file().unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        let date = name.strip_prefix("p42-widgets.log.").unwrap();
        assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }
}
