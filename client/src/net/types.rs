//! REST DTOs for the video backend.
//!
//! DESIGN
//! ======
//! The backend has shipped more than one field spelling for the same data
//! (`thumbnail` vs `thumbnail_path`, `createdAt` vs `created_at`). Aliases
//! accept both so list and detail payloads decode into one `Video` type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A video as listed by `GET /api/videos` or returned by `GET /api/videos/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Backend-assigned identifier.
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    /// Total length in whole seconds.
    #[serde(default)]
    pub duration: u64,
    /// File name of the thumbnail inside the video's directory. The detail
    /// endpoint omits it.
    #[serde(default, alias = "thumbnail")]
    pub thumbnail_path: Option<String>,
    /// RFC 3339 creation timestamp.
    #[serde(default, alias = "createdAt", deserialize_with = "string_or_null")]
    pub created_at: String,
}

/// Response body of a successful `POST /api/admin/videos`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadedVideo {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(default)]
    pub duration: u64,
}

/// Metadata and file handle for a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest<F> {
    pub title: String,
    pub description: String,
    pub file: F,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

/// `{"error": "..."}` body the backend attaches to failures.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
