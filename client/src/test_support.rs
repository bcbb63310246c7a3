//! In-memory fakes shared by flow tests.

use std::cell::RefCell;

use crate::net::api::{ADMIN_LOGIN_ENDPOINT, ADMIN_VERIFY_ENDPOINT, ADMIN_VIDEOS_ENDPOINT, VIDEOS_ENDPOINT, VideoApi, video_endpoint};
use crate::net::error::ApiError;
use crate::net::types::{UploadRequest, UploadedVideo, Video};
use crate::state::upload::SelectedFile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FakeFile {
    pub name: String,
    pub mime_type: String,
}

impl FakeFile {
    pub fn new(name: &str, mime_type: &str) -> Self {
        Self { name: name.to_owned(), mime_type: mime_type.to_owned() }
    }
}

impl SelectedFile for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

pub(crate) fn sample_video(id: &str) -> Video {
    Video {
        id: id.to_owned(),
        title: format!("Video {id}"),
        description: String::new(),
        duration: 90,
        thumbnail_path: Some("thumbnail.jpg".to_owned()),
        created_at: "2024-03-09T14:05:00Z".to_owned(),
    }
}

/// Records every request as `"<METHOD> <path>[ <auth>]"` and answers with
/// the configured results.
pub(crate) struct FakeApi {
    pub calls: RefCell<Vec<String>>,
    pub videos: Result<Vec<Video>, ApiError>,
    pub video: Result<Video, ApiError>,
    pub login: Result<String, ApiError>,
    pub verify: Result<(), ApiError>,
    pub upload: Result<UploadedVideo, ApiError>,
    pub delete: Result<(), ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            videos: Ok(Vec::new()),
            video: Ok(sample_video("v1")),
            login: Ok("fresh-token".to_owned()),
            verify: Ok(()),
            upload: Ok(UploadedVideo {
                id: "new1".to_owned(),
                title: "Uploaded".to_owned(),
                description: String::new(),
                duration: 10,
            }),
            delete: Ok(()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl VideoApi for FakeApi {
    type File = FakeFile;

    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.record(format!("GET {VIDEOS_ENDPOINT}"));
        self.videos.clone()
    }

    async fn get_video(&self, video_id: &str) -> Result<Video, ApiError> {
        self.record(format!("GET {}", video_endpoint(video_id)));
        self.video.clone()
    }

    async fn login(&self, username: &str, _password: &str) -> Result<String, ApiError> {
        self.record(format!("POST {ADMIN_LOGIN_ENDPOINT} {username}"));
        self.login.clone()
    }

    async fn verify_token(&self, token: &str) -> Result<(), ApiError> {
        self.record(format!("GET {ADMIN_VERIFY_ENDPOINT} Bearer {token}"));
        self.verify.clone()
    }

    async fn upload_video(&self, token: &str, upload: &UploadRequest<FakeFile>) -> Result<UploadedVideo, ApiError> {
        self.record(format!("POST {ADMIN_VIDEOS_ENDPOINT} Bearer {token} {}", upload.file.name));
        self.upload.clone()
    }

    async fn delete_video(&self, token: &str, video_id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE {ADMIN_VIDEOS_ENDPOINT}/{video_id} Bearer {token}"));
        self.delete.clone()
    }
}
