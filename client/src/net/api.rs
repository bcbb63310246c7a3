//! REST client for the video backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since pages
//! only issue requests after hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Flows depend on the `VideoApi` trait rather than on `HttpApi` so their
//! ordering (verify before render, delete before re-fetch) can be exercised
//! against in-memory fakes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{UploadRequest, UploadedVideo, Video};
use crate::util::files::BrowserFile;

pub const VIDEOS_ENDPOINT: &str = "/api/videos";
pub const ADMIN_LOGIN_ENDPOINT: &str = "/api/admin/login";
pub const ADMIN_VERIFY_ENDPOINT: &str = "/api/admin/verify";
pub const ADMIN_VIDEOS_ENDPOINT: &str = "/api/admin/videos";

const DEFAULT_THUMBNAIL: &str = "thumbnail.jpg";

/// `GET` path for a single video's metadata.
pub fn video_endpoint(video_id: &str) -> String {
    format!("{VIDEOS_ENDPOINT}/{video_id}")
}

/// HLS master playlist for a video.
pub fn manifest_url(video_id: &str) -> String {
    format!("{VIDEOS_ENDPOINT}/{video_id}/playlist.m3u8")
}

/// Thumbnail image served from the video's stream directory.
pub fn thumbnail_url(video: &Video) -> String {
    let file = video
        .thumbnail_path
        .as_deref()
        .map(|p| p.trim_start_matches('/'))
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_THUMBNAIL);
    format!("{VIDEOS_ENDPOINT}/{}/{file}", video.id)
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_video_endpoint(video_id: &str) -> String {
    format!("{ADMIN_VIDEOS_ENDPOINT}/{video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Backend operations consumed by the UI.
#[allow(async_fn_in_trait)]
pub trait VideoApi {
    /// File handle type carried by uploads.
    type File;

    async fn list_videos(&self) -> Result<Vec<Video>, ApiError>;

    async fn get_video(&self, video_id: &str) -> Result<Video, ApiError>;

    /// Exchange admin credentials for a session token.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    /// `Ok(())` only for a 2xx answer from the verify endpoint.
    async fn verify_token(&self, token: &str) -> Result<(), ApiError>;

    async fn upload_video(
        &self,
        token: &str,
        upload: &UploadRequest<Self::File>,
    ) -> Result<UploadedVideo, ApiError>;

    async fn delete_video(&self, token: &str, video_id: &str) -> Result<(), ApiError>;
}

/// Same-origin HTTP implementation used by the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl VideoApi for HttpApi {
    type File = BrowserFile;

    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(VIDEOS_ENDPOINT).send().await?;
            read_json(resp, "Failed to fetch videos").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get_video(&self, video_id: &str) -> Result<Video, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&video_endpoint(video_id)).send().await?;
            read_json(resp, "Failed to fetch video").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = video_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::{LoginRequest, LoginResponse};

            let resp = gloo_net::http::Request::post(ADMIN_LOGIN_ENDPOINT)
                .json(&LoginRequest { username, password })?
                .send()
                .await?;
            let body: LoginResponse = read_json(resp, "Invalid credentials").await?;
            Ok(body.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn verify_token(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(ADMIN_VERIFY_ENDPOINT)
                .header("Authorization", &bearer(token))
                .send()
                .await?;
            if !resp.ok() {
                return Err(status_failure(resp, "Invalid token").await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn upload_video(
        &self,
        token: &str,
        upload: &UploadRequest<BrowserFile>,
    ) -> Result<UploadedVideo, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::error::js_error;
            use crate::state::upload::SelectedFile as _;

            let form = web_sys::FormData::new().map_err(js_error)?;
            form.append_with_blob_and_filename("video", upload.file.handle(), &upload.file.name())
                .map_err(js_error)?;
            form.append_with_str("title", &upload.title).map_err(js_error)?;
            form.append_with_str("description", &upload.description)
                .map_err(js_error)?;
            let resp = gloo_net::http::Request::post(ADMIN_VIDEOS_ENDPOINT)
                .header("Authorization", &bearer(token))
                .body(form)?
                .send()
                .await?;
            read_json(resp, "Upload failed").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, upload);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_video(&self, token: &str, video_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&admin_video_endpoint(video_id))
                .header("Authorization", &bearer(token))
                .send()
                .await?;
            if !resp.ok() {
                return Err(status_failure(resp, "Failed to delete video").await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, video_id);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_failure(resp, fallback).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn status_failure(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    ApiError::from_status(status, message, fallback)
}
