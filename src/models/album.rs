//! Album models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single album as returned by the albums service.
///
/// Every field is required when decoding; a payload missing any of them
/// is rejected rather than filled with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumRecord {
    /// Owning user.
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Album identifier. Assigned by the server on create.
    pub id: i64,

    /// Album title.
    pub title: String,
}

impl AlbumRecord {
    /// Create a new album record.
    pub fn new<S: Into<String>>(id: i64, title: S, user_id: i64) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
        }
    }
}

impl fmt::Display for AlbumRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Album Title : {}", self.title)?;
        writeln!(f, " Album userId : {}", self.user_id)?;
        writeln!(f, " Album id : {}", self.id)
    }
}

/// Albums in server response order.
pub type AlbumCollection = Vec<AlbumRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let album = AlbumRecord::new(0, "My title", 3);
        let json = serde_json::to_value(&album).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"userId": 3, "id": 0, "title": "My title"})
        );
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<AlbumRecord, _> = serde_json::from_str(r#"{"userId":1,"id":1}"#);
        assert!(result.is_err());

        let result: Result<AlbumRecord, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_mistyped_field_is_rejected() {
        let result: Result<AlbumRecord, _> =
            serde_json::from_str(r#"{"userId":"one","id":1,"title":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_format() {
        let album = AlbumRecord::new(7, "quidem molestiae enim", 1);
        assert_eq!(
            album.to_string(),
            " Album Title : quidem molestiae enim\n Album userId : 1\n Album id : 7\n"
        );
    }
}
