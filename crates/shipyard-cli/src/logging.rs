// Rust guideline compliant 2026-10-12

//! Tracing subscriber setup for the CLI.

use shipyard_app::AppError;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs a stderr subscriber with the given maximum level.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns `InvalidArgument` if `level` is not a known log level.
pub fn init_tracing(level: &str, json: bool) -> Result<(), AppError> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns `InvalidArgument` for an unknown name.
pub fn parse_log_level(level: &str) -> Result<Level, AppError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(AppError::invalid_field(
            "log-level",
            format!("unknown level '{other}'"),
        )),
    }
}
