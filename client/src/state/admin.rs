//! Admin video management: confirmed delete followed by a list refresh.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::logging::warn;

use super::catalog::CatalogState;
use super::flow::FlowPhase;
use super::notice::Notice;
use super::session::SessionStore;
use crate::net::api::VideoApi;
use crate::net::error::ApiError;
use crate::net::types::Video;

/// Result of a delete-then-refresh round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The video was deleted; carries the re-fetched list.
    Deleted(Result<Vec<Video>, ApiError>),
    Failed(ApiError),
}

/// Confirmation and request state for deleting one video.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteFlow {
    /// Video awaiting confirmation (or being deleted).
    pub confirming: Option<String>,
    pub phase: FlowPhase,
}

impl DeleteFlow {
    /// Open the confirmation for `video_id`. Ignored while a delete is
    /// outstanding.
    pub fn request(&mut self, video_id: &str) {
        if self.phase.is_pending() {
            return;
        }
        self.confirming = Some(video_id.to_owned());
    }

    /// Close the confirmation without deleting.
    pub fn cancel(&mut self) {
        if !self.phase.is_pending() {
            self.confirming = None;
        }
    }

    /// Confirm and move to `Pending`. Returns the id to delete, or `None`
    /// when nothing is awaiting confirmation or a delete is already running.
    pub fn begin(&mut self) -> Option<String> {
        if self.phase.is_pending() {
            return None;
        }
        let id = self.confirming.clone()?;
        self.phase = FlowPhase::Pending;
        Some(id)
    }

    /// Return to `Idle`, applying a refreshed list to `catalog`.
    pub fn finish(&mut self, outcome: DeleteOutcome, catalog: &mut CatalogState) -> Notice {
        self.phase = FlowPhase::Idle;
        self.confirming = None;
        match outcome {
            DeleteOutcome::Deleted(refreshed) => {
                if let Some(err) = catalog.apply(refreshed) {
                    warn!("error refreshing videos after delete: {err}");
                }
                Notice::success("Video deleted successfully")
            }
            DeleteOutcome::Failed(err) => {
                warn!("delete failed: {err}");
                Notice::error("Failed to delete video")
            }
        }
    }
}

/// Delete `video_id` with the stored token, then re-fetch the list once.
pub async fn delete_and_refresh<A, S>(api: &A, session: &S, video_id: &str) -> DeleteOutcome
where
    A: VideoApi,
    S: SessionStore,
{
    let Some(token) = session.token() else {
        return DeleteOutcome::Failed(ApiError::Unauthorized);
    };
    if let Err(err) = api.delete_video(&token, video_id).await {
        return DeleteOutcome::Failed(err);
    }
    DeleteOutcome::Deleted(api.list_videos().await)
}
