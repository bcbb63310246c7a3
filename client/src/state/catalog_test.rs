use futures::executor::block_on;

use super::*;
use crate::test_support::{FakeApi, sample_video};

#[test]
fn catalog_starts_loading_and_empty() {
    let state = CatalogState::default();
    assert!(state.loading);
    assert!(state.videos.is_empty());
}

#[test]
fn load_catalog_stores_videos() {
    let api = FakeApi { videos: Ok(vec![sample_video("a"), sample_video("b")]), ..FakeApi::default() };
    let state = block_on(load_catalog(&api));
    assert!(!state.loading);
    assert_eq!(state.videos.len(), 2);
    assert_eq!(api.calls(), vec!["GET /api/videos"]);
}

#[test]
fn load_catalog_failure_falls_back_to_empty_list() {
    let api = FakeApi { videos: Err(ApiError::Network("offline".to_owned())), ..FakeApi::default() };
    let state = block_on(load_catalog(&api));
    assert!(!state.loading);
    assert!(state.videos.is_empty());
}

#[test]
fn apply_error_clears_previous_videos() {
    let mut state = CatalogState { videos: vec![sample_video("a")], loading: true };
    let err = state.apply(Err(ApiError::Decode("bad json".to_owned())));
    assert_eq!(err, Some(ApiError::Decode("bad json".to_owned())));
    assert!(state.videos.is_empty());
    assert!(!state.loading);
}

#[test]
fn load_video_returns_ready_detail() {
    let api = FakeApi { video: Ok(sample_video("v9")), ..FakeApi::default() };
    let detail = block_on(load_video(&api, "v9"));
    assert_eq!(detail, VideoDetail::Ready(sample_video("v9")));
    assert_eq!(api.calls(), vec!["GET /api/videos/v9"]);
}

#[test]
fn load_video_failure_is_missing() {
    let api = FakeApi {
        video: Err(ApiError::Status { status: 404, message: "Video not found".to_owned() }),
        ..FakeApi::default()
    };
    assert_eq!(block_on(load_video(&api, "gone")), VideoDetail::Missing);
}

#[test]
fn load_video_blank_id_skips_request() {
    let api = FakeApi::default();
    assert_eq!(block_on(load_video(&api, "  ")), VideoDetail::Missing);
    assert!(api.calls().is_empty());
}
