//! Albums API client.
//!
//! This module provides the shared client for the albums service
//! (jsonplaceholder.typicode.com by default). No authentication is required.

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::endpoint::Endpoint;
use super::logging::HttpLogger;
use crate::config::ClientConfig;
use crate::error::{AlbumError, Result, TransportError};
use crate::models::{AlbumCollection, AlbumRecord};
use crate::result::{CallResult, FailureReason};

/// Build the shared albums client from a configuration.
///
/// Performs no I/O. Fails only when the base URL is malformed or the
/// underlying HTTP client cannot be created.
pub fn build_client(config: &ClientConfig) -> Result<AlbumApi> {
    AlbumApi::new(config)
}

/// Albums API client.
///
/// Cheap to clone and safe to share between tasks; clones reuse the same
/// connection pool. Each call issues exactly one request and never retries.
///
/// # Example
///
/// ```rust,no_run
/// use albumfetch::{build_client, ClientConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = build_client(&ClientConfig::default())?;
///     let album = api.get_album(3).await.into_result()?;
///     println!("{}", album.title);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AlbumApi {
    client: Client,
    base_url: Url,
    logger: HttpLogger,
    /// Deadline for requests that carry a body.
    body_deadline: Duration,
}

impl AlbumApi {
    /// Create a new albums client.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            logger: HttpLogger::new(config.log_level),
            body_deadline: config.write_timeout + config.read_timeout,
        })
    }

    /// Base URL endpoint paths resolve against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch every album.
    pub async fn list_albums(&self) -> CallResult<AlbumCollection> {
        self.call(Endpoint::ListAlbums).await
    }

    /// Fetch the albums owned by `user_id`.
    ///
    /// Filtering happens server-side; the order is the server's.
    pub async fn list_albums_by_user(&self, user_id: i64) -> CallResult<AlbumCollection> {
        self.call(Endpoint::ListAlbumsByUser { user_id }).await
    }

    /// Fetch a single album by ID.
    pub async fn get_album(&self, id: i64) -> CallResult<AlbumRecord> {
        self.call(Endpoint::GetAlbum { id }).await
    }

    /// Upload an album.
    ///
    /// The submitted `id` is sent as-is; the returned record carries whatever
    /// ID the server assigned.
    pub async fn create_album(&self, album: &AlbumRecord) -> CallResult<AlbumRecord> {
        self.call(Endpoint::CreateAlbum(album.clone())).await
    }

    /// Issue one endpoint call and decode the reply into `T`.
    pub async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> CallResult<T> {
        let spec = match endpoint.request() {
            Ok(spec) => spec,
            Err(e) => return transport_failure(TransportError::Request(e.to_string())),
        };

        let url = match self.base_url.join(&spec.path) {
            Ok(url) => url,
            Err(e) => return transport_failure(TransportError::Request(e.to_string())),
        };
        debug!("{}: {} {}", endpoint.name(), spec.method, url);

        let mut builder = self.client.request(spec.method.clone(), url);
        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json; charset=UTF-8")
                .body(body.clone())
                .timeout(self.body_deadline);
        }

        let request = match builder.build() {
            Ok(request) => request,
            Err(e) => return transport_failure(TransportError::from_reqwest(&e)),
        };
        let url = request.url().clone();
        self.logger.log_request(&request, spec.body.as_deref());

        let started = Instant::now();
        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let cause = TransportError::from_reqwest(&e);
                self.logger.log_failure(&url, started.elapsed(), &cause);
                error!("{} failed: {}", endpoint.name(), cause);
                return transport_failure(cause);
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let cause = TransportError::from_reqwest(&e);
                self.logger.log_failure(&url, started.elapsed(), &cause);
                error!("{} failed reading body: {}", endpoint.name(), cause);
                return transport_failure(cause);
            }
        };
        self.logger
            .log_response(&url, status, &headers, started.elapsed(), &body);

        decode_response(endpoint.name(), status.as_u16(), body)
    }
}

/// Validate the configured base URL.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| AlbumError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AlbumError::InvalidBaseUrl(format!(
            "{}: unsupported scheme '{}'",
            raw,
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(AlbumError::InvalidBaseUrl(format!("{}: missing host", raw)));
    }

    Ok(url)
}

fn transport_failure<T>(cause: TransportError) -> CallResult<T> {
    CallResult::TransportError { cause }
}

/// Turn a completed exchange into a call result.
fn decode_response<T: DeserializeOwned>(operation: &str, status: u16, body: String) -> CallResult<T> {
    if !(200..300).contains(&status) {
        warn!("{} returned HTTP {}", operation, status);
        return CallResult::Failure {
            status: Some(status),
            raw_body: Some(body),
            reason: FailureReason::Status,
        };
    }

    match serde_json::from_str(&body) {
        Ok(decoded) => CallResult::Success {
            status,
            body: decoded,
        },
        Err(e) => {
            warn!("{} returned an undecodable body: {}", operation, e);
            CallResult::Failure {
                status: Some(status),
                raw_body: Some(body),
                reason: FailureReason::Decode(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_defaults() {
        let api = build_client(&ClientConfig::default()).unwrap();
        assert_eq!(
            api.base_url().as_str(),
            "https://jsonplaceholder.typicode.com/"
        );
    }

    #[test]
    fn test_malformed_base_urls_are_rejected() {
        for raw in ["", "not a url", "ftp://example.com/", "mailto:someone@example.com"] {
            let result = build_client(&ClientConfig::new(raw));
            assert!(
                matches!(result, Err(AlbumError::InvalidBaseUrl(_))),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_endpoint_paths_resolve_against_origin() {
        let base = parse_base_url("https://example.com/api/v1/").unwrap();
        assert_eq!(
            base.join("/albums/3").unwrap().as_str(),
            "https://example.com/albums/3"
        );
    }

    #[test]
    fn test_decode_success() {
        let result: CallResult<AlbumCollection> = decode_response(
            "list_albums",
            200,
            r#"[{"userId":1,"id":2,"title":"b"},{"userId":1,"id":1,"title":"a"}]"#.to_string(),
        );
        let albums = result.into_result().unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].id, 2);
        assert_eq!(albums[1].id, 1);
    }

    #[test]
    fn test_decode_non_2xx_keeps_raw_body() {
        let result: CallResult<AlbumRecord> =
            decode_response("get_album", 404, "{}".to_string());
        assert_eq!(
            result,
            CallResult::Failure {
                status: Some(404),
                raw_body: Some("{}".to_string()),
                reason: FailureReason::Status,
            }
        );
    }

    #[test]
    fn test_decode_shape_mismatch_is_failure() {
        let result: CallResult<AlbumRecord> = decode_response("get_album", 200, "{}".to_string());
        assert!(result.is_decode_error());
        assert_eq!(result.status(), Some(200));
        assert_eq!(result.raw_body(), Some("{}"));
    }
}
