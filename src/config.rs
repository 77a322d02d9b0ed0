//! Client configuration.

use std::time::Duration;

/// Default base URL of the albums service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

/// How much of each HTTP exchange the logging interceptor records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// No logging.
    None,
    /// Request and response lines only.
    Basic,
    /// Request and response lines plus headers.
    Headers,
    /// Lines, headers and bodies.
    #[default]
    Body,
}

impl LogLevel {
    /// Whether request/response lines are logged.
    pub fn logs_lines(self) -> bool {
        self >= LogLevel::Basic
    }

    /// Whether headers are logged.
    pub fn logs_headers(self) -> bool {
        self >= LogLevel::Headers
    }

    /// Whether bodies are logged.
    pub fn logs_bodies(self) -> bool {
        self >= LogLevel::Body
    }
}

/// Configuration for [`build_client`](crate::build_client).
///
/// Built once and shared by every request made through the resulting client.
///
/// # Example
///
/// ```rust
/// use albumfetch::{ClientConfig, LogLevel};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_read_timeout(Duration::from_secs(5))
///     .with_log_level(LogLevel::Basic);
/// assert_eq!(config.read_timeout_ms(), 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL endpoint paths are resolved against.
    pub base_url: String,

    /// Bound on TCP/TLS connection establishment.
    pub connect_timeout: Duration,

    /// Bound on inactivity between received bytes.
    pub read_timeout: Duration,

    /// Bound on sending a request body.
    pub write_timeout: Duration,

    /// Verbosity of the logging interceptor.
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(20),
            write_timeout: Duration::from_secs(25),
            log_level: LogLevel::Body,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with defaults and the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the write timeout.
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Set the logging verbosity.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn connect_timeout_ms(&self) -> u128 {
        self.connect_timeout.as_millis()
    }

    pub fn read_timeout_ms(&self) -> u128 {
        self.read_timeout.as_millis()
    }

    pub fn write_timeout_ms(&self) -> u128 {
        self.write_timeout.as_millis()
    }
}
