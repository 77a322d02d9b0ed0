//! The fixed set of album endpoints.
//!
//! Each [`Endpoint`] is a pure description of one HTTP call: method, path,
//! query and body. [`AlbumApi`](super::AlbumApi) turns it into a request and
//! decodes the reply.

use reqwest::Method;

use crate::models::AlbumRecord;

/// Collection path; single albums live under it.
const ALBUMS_PATH: &str = "/albums";

/// One of the four album operations with its parameters bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /albums`
    ListAlbums,
    /// `GET /albums?userId={user_id}`
    ListAlbumsByUser { user_id: i64 },
    /// `GET /albums/{id}`
    GetAlbum { id: i64 },
    /// `POST /albums` with the album as JSON body.
    CreateAlbum(AlbumRecord),
}

/// A request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl Endpoint {
    /// Short operation name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::ListAlbums => "list_albums",
            Endpoint::ListAlbumsByUser { .. } => "list_albums_by_user",
            Endpoint::GetAlbum { .. } => "get_album",
            Endpoint::CreateAlbum(_) => "create_album",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::CreateAlbum(_) => Method::POST,
            _ => Method::GET,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::GetAlbum { id } => format!("{}/{}", ALBUMS_PATH, id),
            _ => ALBUMS_PATH.to_string(),
        }
    }

    /// Describe the request this endpoint issues.
    ///
    /// Fails only if the create body cannot be serialized.
    pub fn request(&self) -> Result<RequestSpec, serde_json::Error> {
        let query = match self {
            Endpoint::ListAlbumsByUser { user_id } => vec![("userId", user_id.to_string())],
            _ => Vec::new(),
        };
        let body = match self {
            Endpoint::CreateAlbum(album) => Some(serde_json::to_string(album)?),
            _ => None,
        };

        Ok(RequestSpec {
            method: self.method(),
            path: self.path(),
            query,
            body,
        })
    }
}
