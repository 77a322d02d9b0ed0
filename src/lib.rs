//! # albumfetch
//!
//! A typed async client for the albums endpoints of a JSON REST service
//! (JSONPlaceholder by default).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use albumfetch::{build_client, AlbumRecord, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = build_client(&ClientConfig::default())?;
//!
//!     // Every album
//!     for album in api.list_albums().await.into_result()? {
//!         print!("{}", album);
//!     }
//!
//!     // Albums of one user, a single album, and an upload
//!     let by_user = api.list_albums_by_user(5).await.into_result()?;
//!     let album = api.get_album(3).await.into_result()?;
//!     let created = api
//!         .create_album(&AlbumRecord::new(0, "My title", 3))
//!         .await
//!         .into_result()?;
//!     println!("{} {} {}", by_user.len(), album.title, created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Outcomes
//!
//! Endpoint calls never return `Err` and never retry. Each returns a
//! [`CallResult`]:
//!
//! - `Success`: 2xx status and a body of the expected shape
//! - `Failure`: non-2xx status, or a 2xx body that does not decode; carries
//!   the raw status and body
//! - `TransportError`: the server could not be reached or timed out

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod result;

pub use api::{build_client, AlbumApi, Endpoint};
pub use config::{ClientConfig, LogLevel};
pub use error::{AlbumError, CallError, TransportError};
pub use models::{AlbumCollection, AlbumRecord};
pub use result::{CallResult, FailureReason};
