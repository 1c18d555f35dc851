use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Top-level error for service startup and runtime plumbing. Request-level
/// pipeline failures are mapped to HTTP responses inside the router instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
}
