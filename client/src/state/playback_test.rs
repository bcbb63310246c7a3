use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct Log {
    events: Vec<String>,
    live: usize,
    next_id: usize,
}

#[derive(Clone)]
struct FakeBackend {
    log: Rc<RefCell<Log>>,
    decoder: bool,
    native: bool,
}

impl FakeBackend {
    fn new(decoder: bool, native: bool) -> Self {
        Self { log: Rc::new(RefCell::new(Log::default())), decoder, native }
    }

    fn events(&self) -> Vec<String> {
        self.log.borrow().events.clone()
    }

    fn live(&self) -> usize {
        self.log.borrow().live
    }
}

impl PlaybackBackend for FakeBackend {
    type Decoder = usize;

    fn decoder_supported(&self) -> bool {
        self.decoder
    }

    fn create_decoder(&mut self, source_url: &str) -> usize {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        log.live += 1;
        let id = log.next_id;
        log.events.push(format!("create#{id} {source_url}"));
        id
    }

    fn destroy_decoder(&mut self, decoder: usize) {
        let mut log = self.log.borrow_mut();
        log.live -= 1;
        log.events.push(format!("destroy#{decoder}"));
    }

    fn native_supported(&self, mime_type: &str) -> bool {
        self.native && mime_type == HLS_MIME_TYPE
    }

    fn attach_native(&mut self, source_url: &str) {
        self.log.borrow_mut().events.push(format!("native {source_url}"));
    }

    fn detach_native(&mut self) {
        self.log.borrow_mut().events.push("detach".to_owned());
    }
}

#[test]
fn bind_creates_one_decoder_for_manifest() {
    let backend = FakeBackend::new(true, false);
    let mut controller = PlaybackController::new(backend.clone());
    assert_eq!(controller.bind("A"), PlaybackMode::Decoder);
    assert_eq!(controller.bound_video(), Some("A"));
    assert_eq!(backend.live(), 1);
    assert_eq!(backend.events(), vec!["create#1 /api/videos/A/playlist.m3u8"]);
}

#[test]
fn switching_videos_destroys_previous_decoder_first() {
    let backend = FakeBackend::new(true, false);
    let mut controller = PlaybackController::new(backend.clone());
    controller.bind("A");
    controller.bind("B");
    assert_eq!(backend.live(), 1);
    assert_eq!(
        backend.events(),
        vec![
            "create#1 /api/videos/A/playlist.m3u8",
            "destroy#1",
            "create#2 /api/videos/B/playlist.m3u8",
        ]
    );
}

#[test]
fn rebinding_same_video_is_noop() {
    let backend = FakeBackend::new(true, false);
    let mut controller = PlaybackController::new(backend.clone());
    controller.bind("A");
    controller.bind("A");
    assert_eq!(backend.events().len(), 1);
    assert_eq!(backend.live(), 1);
}

#[test]
fn release_is_idempotent() {
    let backend = FakeBackend::new(true, false);
    let mut controller = PlaybackController::new(backend.clone());
    controller.bind("A");
    controller.release();
    controller.release();
    assert_eq!(backend.live(), 0);
    assert_eq!(backend.events(), vec!["create#1 /api/videos/A/playlist.m3u8", "destroy#1"]);
    assert_eq!(controller.mode(), PlaybackMode::Idle);
    assert_eq!(controller.bound_video(), None);
}

#[test]
fn drop_releases_decoder_exactly_once() {
    let backend = FakeBackend::new(true, false);
    {
        let mut controller = PlaybackController::new(backend.clone());
        controller.bind("A");
        controller.release();
    }
    assert_eq!(backend.live(), 0);
    assert_eq!(backend.events().iter().filter(|e| e.starts_with("destroy")).count(), 1);

    let backend = FakeBackend::new(true, false);
    {
        let mut controller = PlaybackController::new(backend.clone());
        controller.bind("A");
    }
    assert_eq!(backend.live(), 0);
}

#[test]
fn rebinding_after_release_creates_fresh_decoder() {
    let backend = FakeBackend::new(true, false);
    let mut controller = PlaybackController::new(backend.clone());
    controller.bind("A");
    controller.release();
    controller.bind("A");
    assert_eq!(backend.live(), 1);
    assert_eq!(backend.events().last().map(String::as_str), Some("create#2 /api/videos/A/playlist.m3u8"));
}

#[test]
fn falls_back_to_native_playback() {
    let backend = FakeBackend::new(false, true);
    let mut controller = PlaybackController::new(backend.clone());
    assert_eq!(controller.bind("A"), PlaybackMode::Native);
    controller.bind("B");
    assert_eq!(backend.live(), 0);
    assert_eq!(
        backend.events(),
        vec![
            "native /api/videos/A/playlist.m3u8",
            "detach",
            "native /api/videos/B/playlist.m3u8",
        ]
    );
}

#[test]
fn reports_unsupported_without_touching_element() {
    let backend = FakeBackend::new(false, false);
    let mut controller = PlaybackController::new(backend.clone());
    assert_eq!(controller.bind("A"), PlaybackMode::Unsupported);
    drop(controller);
    assert!(backend.events().is_empty());
}
