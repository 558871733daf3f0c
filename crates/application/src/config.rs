//! Order service configuration loaded from environment variables.

use domain::CancellationPolicy;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Order service configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `text` or `json` (default: `text`)
/// - `ORDER_ALLOW_CANCEL_FROM_PENDING`: whether unpaid orders may be
///   cancelled directly (default: `true`)
#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub allow_cancel_from_pending: bool,
}

impl OrderServiceConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .and_then(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
            allow_cancel_from_pending: lookup("ORDER_ALLOW_CANCEL_FROM_PENDING")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.allow_cancel_from_pending),
        }
    }

    /// Returns the cancellation policy for the domain service.
    pub fn cancellation_policy(&self) -> CancellationPolicy {
        CancellationPolicy {
            allow_cancel_from_pending: self.allow_cancel_from_pending,
        }
    }
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            allow_cancel_from_pending: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
