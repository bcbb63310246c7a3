//! Playback controller: one streaming decoder per media element.
//!
//! DESIGN
//! ======
//! Decoder ownership is scoped acquisition. `bind` releases whatever is
//! attached before acquiring for the new video, `release` is idempotent, and
//! `Drop` releases. A controller therefore never holds two live decoders and
//! never destroys the same one twice.
//!
//! The browser specifics (hls.js, `<video>` attributes) live behind
//! `PlaybackBackend`; see `util::hls`.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

use crate::net::api::manifest_url;

/// MIME type a media element reports for native HLS support.
pub const HLS_MIME_TYPE: &str = "application/vnd.apple.mpegurl";

/// Platform operations the controller sequences.
pub trait PlaybackBackend {
    /// Live decoder instance bound to the media element.
    type Decoder;

    /// Whether an adaptive-streaming decoder can run on this platform.
    fn decoder_supported(&self) -> bool;

    /// Create a decoder, attach it to the element, load `source_url`, and
    /// request playback once the manifest is parsed.
    fn create_decoder(&mut self, source_url: &str) -> Self::Decoder;

    fn destroy_decoder(&mut self, decoder: Self::Decoder);

    /// Whether the element itself can play `mime_type`.
    fn native_supported(&self, mime_type: &str) -> bool;

    /// Point the element's `src` at `source_url` and request playback.
    fn attach_native(&mut self, source_url: &str);

    fn detach_native(&mut self);
}

/// How the current video is being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Nothing bound.
    #[default]
    Idle,
    /// Adaptive decoder attached.
    Decoder,
    /// Source assigned directly to the element.
    Native,
    /// Neither path is available.
    Unsupported,
}

pub struct PlaybackController<B: PlaybackBackend> {
    backend: B,
    decoder: Option<B::Decoder>,
    bound: Option<String>,
    mode: PlaybackMode,
}

impl<B: PlaybackBackend> PlaybackController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, decoder: None, bound: None, mode: PlaybackMode::Idle }
    }

    /// Bind the element to `video_id`, tearing down any previous binding
    /// first. Binding the id that is already bound is a no-op.
    pub fn bind(&mut self, video_id: &str) -> PlaybackMode {
        if self.bound.as_deref() == Some(video_id) {
            return self.mode;
        }
        self.release();

        let url = manifest_url(video_id);
        self.mode = if self.backend.decoder_supported() {
            self.decoder = Some(self.backend.create_decoder(&url));
            PlaybackMode::Decoder
        } else if self.backend.native_supported(HLS_MIME_TYPE) {
            self.backend.attach_native(&url);
            PlaybackMode::Native
        } else {
            leptos::logging::warn!("no HLS playback path for video {video_id}");
            PlaybackMode::Unsupported
        };
        self.bound = Some(video_id.to_owned());
        self.mode
    }

    /// Tear down the current binding. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(decoder) = self.decoder.take() {
            self.backend.destroy_decoder(decoder);
        }
        if self.mode == PlaybackMode::Native {
            self.backend.detach_native();
        }
        self.mode = PlaybackMode::Idle;
        self.bound = None;
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn bound_video(&self) -> Option<&str> {
        self.bound.as_deref()
    }
}

impl<B: PlaybackBackend> Drop for PlaybackController<B> {
    fn drop(&mut self) {
        self.release();
    }
}
