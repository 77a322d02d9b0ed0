//! HTTP logging interceptor.
//!
//! Records every request/response pair through `tracing` at the configured
//! [`LogLevel`]. Only observes; never changes what is sent or returned.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode, Url};
use tracing::info;

use crate::config::LogLevel;

/// Logs HTTP exchanges at a fixed verbosity.
#[derive(Debug, Clone, Copy)]
pub struct HttpLogger {
    level: LogLevel,
}

impl HttpLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Log an outgoing request. `body` is the serialized body, if any.
    pub fn log_request(&self, request: &Request, body: Option<&str>) {
        if !self.level.logs_lines() {
            return;
        }

        info!(
            target: "albumfetch::http",
            "--> {} {} ({}-byte body)",
            request.method(),
            request.url(),
            body.map_or(0, str::len)
        );
        if self.level.logs_headers() {
            log_headers("-->", request.headers());
        }
        if self.level.logs_bodies() {
            if let Some(body) = body {
                info!(target: "albumfetch::http", "--> {}", body);
            }
        }
        info!(target: "albumfetch::http", "--> END {}", request.method());
    }

    /// Log a received response and its body.
    pub fn log_response(
        &self,
        url: &Url,
        status: StatusCode,
        headers: &HeaderMap,
        elapsed: Duration,
        body: &str,
    ) {
        if !self.level.logs_lines() {
            return;
        }

        info!(
            target: "albumfetch::http",
            "<-- {} {} ({}ms, {}-byte body)",
            status,
            url,
            elapsed.as_millis(),
            body.len()
        );
        if self.level.logs_headers() {
            log_headers("<--", headers);
        }
        if self.level.logs_bodies() && !body.is_empty() {
            info!(target: "albumfetch::http", "<-- {}", body);
        }
        info!(target: "albumfetch::http", "<-- END HTTP");
    }

    /// Log a request that failed before a response arrived.
    pub fn log_failure(&self, url: &Url, elapsed: Duration, cause: &dyn std::fmt::Display) {
        if self.level.logs_lines() {
            info!(
                target: "albumfetch::http",
                "<-- HTTP FAILED {} ({}ms): {}",
                url,
                elapsed.as_millis(),
                cause
            );
        }
    }
}

fn log_headers(direction: &str, headers: &HeaderMap) {
    for (name, value) in headers {
        info!(
            target: "albumfetch::http",
            "{} {}: {}",
            direction,
            name,
            value.to_str().unwrap_or("<binary>")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_logger_accepts_exchanges() {
        let logger = HttpLogger::new(LogLevel::None);
        let url = Url::parse("http://localhost/albums").unwrap();
        let request = Request::new(reqwest::Method::GET, url.clone());

        logger.log_request(&request, None);
        logger.log_response(&url, StatusCode::OK, &HeaderMap::new(), Duration::ZERO, "[]");
        logger.log_failure(&url, Duration::ZERO, &"refused");
        assert_eq!(logger.level(), LogLevel::None);
    }

    #[test]
    fn test_body_logger_accepts_exchanges() {
        let logger = HttpLogger::new(LogLevel::Body);
        let url = Url::parse("http://localhost/albums").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let request = Request::new(reqwest::Method::POST, url.clone());

        logger.log_request(&request, Some(r#"{"userId":3,"id":0,"title":"x"}"#));
        logger.log_response(&url, StatusCode::CREATED, &headers, Duration::from_millis(4), "{}");
    }
}
