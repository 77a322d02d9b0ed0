//! Albums API client.
//!
//! - [`endpoint`]: the four operations as plain request descriptions
//! - [`logging`]: the request/response logging interceptor
//! - [`AlbumApi`]: the shared client that executes them

pub mod albums;
pub mod endpoint;
pub mod logging;

pub use albums::{build_client, AlbumApi};
pub use endpoint::{Endpoint, RequestSpec};
pub use logging::HttpLogger;
