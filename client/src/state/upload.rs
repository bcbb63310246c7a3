//! Upload form state.
//!
//! The form validates locally (video MIME type, a title) before anything
//! reaches the network, refuses a second submission while one is pending,
//! and resets itself after a successful upload.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use super::flow::FlowPhase;
use super::notice::Notice;
use super::session::SessionStore;
use crate::net::api::VideoApi;
use crate::net::error::ApiError;
use crate::net::types::{UploadRequest, UploadedVideo};

const VIDEO_MIME_PREFIX: &str = "video/";

/// A file picked by the user.
pub trait SelectedFile: Clone {
    fn name(&self) -> String;

    /// Declared MIME type, possibly empty.
    fn mime_type(&self) -> String;
}

/// Local validation failures. Messages are shown verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select a video file")]
    NotVideo,
    #[error("Please select a video file")]
    MissingFile,
    #[error("Please enter a title")]
    MissingTitle,
    #[error("An upload is already in progress")]
    Busy,
}

pub fn is_video_type(mime_type: &str) -> bool {
    mime_type.trim().to_ascii_lowercase().starts_with(VIDEO_MIME_PREFIX)
}

#[derive(Clone, Debug)]
pub struct UploadDraft<F> {
    pub title: String,
    pub description: String,
    pub file: Option<F>,
    pub phase: FlowPhase,
}

impl<F> Default for UploadDraft<F> {
    fn default() -> Self {
        Self { title: String::new(), description: String::new(), file: None, phase: FlowPhase::Idle }
    }
}

impl<F: SelectedFile> UploadDraft<F> {
    /// Accept `file` if it declares a video type. A rejected file leaves the
    /// current selection unchanged.
    ///
    /// # Errors
    ///
    /// `UploadError::NotVideo` for any non-video MIME type.
    pub fn select_file(&mut self, file: F) -> Result<(), UploadError> {
        if !is_video_type(&file.mime_type()) {
            return Err(UploadError::NotVideo);
        }
        self.file = Some(file);
        Ok(())
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(SelectedFile::name)
    }

    /// Validate and move to `Pending`, returning the request to send.
    ///
    /// # Errors
    ///
    /// `Busy` while a submission is outstanding, `MissingFile` or
    /// `MissingTitle` when the form is incomplete.
    pub fn begin_submit(&mut self) -> Result<UploadRequest<F>, UploadError> {
        if self.phase.is_pending() {
            return Err(UploadError::Busy);
        }
        let Some(file) = self.file.clone() else {
            return Err(UploadError::MissingFile);
        };
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UploadError::MissingTitle);
        }
        let request = UploadRequest {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            file,
        };
        self.phase = FlowPhase::Pending;
        Ok(request)
    }

    /// Return to `Idle`. Success resets the form.
    pub fn finish(&mut self, result: &Result<UploadedVideo, ApiError>) -> Notice {
        self.phase = FlowPhase::Idle;
        match result {
            Ok(_) => {
                self.title.clear();
                self.description.clear();
                self.file = None;
                Notice::success("Video uploaded successfully")
            }
            Err(err) => Notice::error(err.user_message("Upload failed")),
        }
    }
}

/// Send `request` with the stored bearer token.
///
/// # Errors
///
/// `ApiError::Unauthorized` without a request when no token is stored;
/// otherwise the backend or transport failure.
pub async fn submit_upload<A, S>(api: &A, session: &S, request: &UploadRequest<A::File>) -> Result<UploadedVideo, ApiError>
where
    A: VideoApi,
    S: SessionStore,
{
    let token = session.token().ok_or(ApiError::Unauthorized)?;
    api.upload_video(&token, request).await
}
