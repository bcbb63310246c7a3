//! hls.js bindings and the browser `PlaybackBackend`.
//!
//! hls.js is loaded as a global `Hls` by the document shell. When the script
//! is missing or reports no MSE support, the controller falls back to native
//! playback (Safari) through the same backend.

use leptos::logging::warn;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlMediaElement, HtmlVideoElement};

use crate::state::playback::PlaybackBackend;

const MANIFEST_PARSED: &str = "hlsManifestParsed";

#[wasm_bindgen]
extern "C" {
    type Hls;

    #[wasm_bindgen(constructor)]
    fn new() -> Hls;

    #[wasm_bindgen(static_method_of = Hls, js_name = isSupported)]
    fn is_supported() -> bool;

    #[wasm_bindgen(method, js_name = loadSource)]
    fn load_source(this: &Hls, url: &str);

    #[wasm_bindgen(method, js_name = attachMedia)]
    fn attach_media(this: &Hls, media: &HtmlMediaElement);

    #[wasm_bindgen(method)]
    fn on(this: &Hls, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn destroy(this: &Hls);
}

fn hls_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Hls")).unwrap_or(false)
}

/// Ask the element to start playing. Autoplay rejections are expected on
/// some browsers and only logged.
fn request_play(media: &HtmlMediaElement) {
    match media.play() {
        Ok(promise) => leptos::task::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!("playback start rejected: {err:?}");
            }
        }),
        Err(err) => warn!("playback start failed: {err:?}"),
    }
}

/// A live hls.js instance and the listener it calls back into.
pub struct HlsDecoder {
    hls: Hls,
    _on_manifest: Closure<dyn FnMut()>,
}

/// Backend bound to one `<video>` element.
pub struct HlsBackend {
    video: HtmlVideoElement,
}

impl HlsBackend {
    pub fn new(video: HtmlVideoElement) -> Self {
        Self { video }
    }
}

impl PlaybackBackend for HlsBackend {
    type Decoder = HlsDecoder;

    fn decoder_supported(&self) -> bool {
        hls_loaded() && Hls::is_supported()
    }

    fn create_decoder(&mut self, source_url: &str) -> HlsDecoder {
        let hls = Hls::new();
        let media: HtmlMediaElement = self.video.clone().unchecked_into();
        let on_manifest = Closure::<dyn FnMut()>::new(move || request_play(&media));
        hls.on(MANIFEST_PARSED, on_manifest.as_ref().unchecked_ref());
        hls.load_source(source_url);
        hls.attach_media(&self.video);
        HlsDecoder { hls, _on_manifest: on_manifest }
    }

    fn destroy_decoder(&mut self, decoder: HlsDecoder) {
        decoder.hls.destroy();
    }

    fn native_supported(&self, mime_type: &str) -> bool {
        !self.video.can_play_type(mime_type).is_empty()
    }

    fn attach_native(&mut self, source_url: &str) {
        self.video.set_src(source_url);
        request_play(&self.video);
    }

    fn detach_native(&mut self) {
        let _ = self.video.remove_attribute("src");
        self.video.load();
    }
}
