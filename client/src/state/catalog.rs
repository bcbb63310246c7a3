//! Video catalog and detail state.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures never propagate into rendering: the catalog falls back to
//! an empty list and the detail view to "not found". The error is handed back
//! to the caller for logging or a notice.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::logging::warn;

use crate::net::api::VideoApi;
use crate::net::error::ApiError;
use crate::net::types::Video;

/// Video list plus its loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    pub videos: Vec<Video>,
    pub loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { videos: Vec::new(), loading: true }
    }
}

impl CatalogState {
    /// Store a fetch result. Returns the error, if any, after falling back to
    /// an empty list.
    pub fn apply(&mut self, result: Result<Vec<Video>, ApiError>) -> Option<ApiError> {
        self.loading = false;
        match result {
            Ok(videos) => {
                self.videos = videos;
                None
            }
            Err(err) => {
                self.videos.clear();
                Some(err)
            }
        }
    }
}

/// Fetch the public catalog. Never fails; errors are logged.
pub async fn load_catalog<A: VideoApi>(api: &A) -> CatalogState {
    let mut state = CatalogState::default();
    if let Some(err) = state.apply(api.list_videos().await) {
        warn!("error fetching videos: {err}");
    }
    state
}

/// Detail view state for `/watch/:video_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoDetail {
    #[default]
    Loading,
    Missing,
    Ready(Video),
}

impl VideoDetail {
    pub fn from_result(result: Result<Video, ApiError>) -> Self {
        match result {
            Ok(video) => Self::Ready(video),
            Err(err) => {
                warn!("error fetching video: {err}");
                Self::Missing
            }
        }
    }
}

/// Fetch one video's metadata for the watch page.
pub async fn load_video<A: VideoApi>(api: &A, video_id: &str) -> VideoDetail {
    if video_id.trim().is_empty() {
        return VideoDetail::Missing;
    }
    VideoDetail::from_result(api.get_video(video_id).await)
}
