//! JavaScript-facing player

use super::file::BrowserFile;
use super::sink::HtmlAudioSink;
use crate::{PlaybackConfig, PlaybackController, PlaybackSnapshot, PlayerCommand, SinkEvent};
use js_sys::Function;
use std::sync::Once;
use tracing::warn;
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::prelude::*;
use web_sys::{FileList, HtmlAudioElement};

type JsView = Box<dyn FnMut(&PlaybackSnapshot)>;

static INIT: Once = Once::new();

/// Route panics and `tracing` events to the browser console
fn init_console() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        // Time updates log at trace; keep them out of the console
        tracing_wasm::set_as_global_default_with_config(
            WASMLayerConfigBuilder::new()
                .set_max_level(tracing::Level::DEBUG)
                .build(),
        );
    });
}

/// Wrap a JS callback as a renderer
fn js_view(callback: Function) -> JsView {
    Box::new(move |snapshot: &PlaybackSnapshot| {
        let value = match serde_wasm_bindgen::to_value(snapshot) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to serialize snapshot");
                return;
            }
        };
        if let Err(e) = callback.call1(&JsValue::NULL, &value) {
            warn!(error = ?e, "Render callback threw");
        }
    })
}

/// Browser music player
///
/// Every method ends by calling `onRender(snapshot)`. The page is expected
/// to forward the audio element's `timeupdate`, `loadedmetadata` and
/// `ended` events to [`on_time_update`](Self::on_time_update),
/// [`on_duration_known`](Self::on_duration_known) and
/// [`on_ended`](Self::on_ended).
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: PlaybackController<HtmlAudioSink, JsView>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player for an `<audio>` element
    ///
    /// `config` is an optional `PlaybackConfig` object
    /// (`{ volume, shuffle, repeat, library: { mime_prefix } }`).
    #[wasm_bindgen(constructor)]
    pub fn new(
        audio: HtmlAudioElement,
        on_render: Function,
        config: JsValue,
    ) -> Result<WasmPlayer, JsValue> {
        init_console();

        let config: PlaybackConfig = if config.is_undefined() || config.is_null() {
            PlaybackConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        let inner =
            PlaybackController::new(HtmlAudioSink::new(audio), js_view(on_render), config)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self { inner })
    }

    // ===== User Intent =====

    /// Replace the library with the picked files
    #[wasm_bindgen(js_name = loadFiles)]
    pub fn load_files(&mut self, files: FileList) {
        let files: Vec<BrowserFile> = (0..files.length())
            .filter_map(|i| files.get(i))
            .map(BrowserFile::from)
            .collect();
        self.inner.dispatch(PlayerCommand::LoadFiles(files));
    }

    #[wasm_bindgen(js_name = playPause)]
    pub fn play_pause(&mut self) {
        self.inner.dispatch(PlayerCommand::PlayPause);
    }

    pub fn next(&mut self) {
        self.inner.dispatch(PlayerCommand::Next);
    }

    pub fn previous(&mut self) {
        self.inner.dispatch(PlayerCommand::Previous);
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.dispatch(PlayerCommand::ToggleShuffle);
    }

    #[wasm_bindgen(js_name = toggleRepeat)]
    pub fn toggle_repeat(&mut self) {
        self.inner.dispatch(PlayerCommand::ToggleRepeat);
    }

    /// Seek to a fraction (0.0 - 1.0) of the track
    pub fn seek(&mut self, fraction: f64) {
        self.inner.dispatch(PlayerCommand::Seek(fraction));
    }

    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, text: String) {
        self.inner.dispatch(PlayerCommand::Filter(text));
    }

    /// Set volume (0-100)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: u8) {
        self.inner.dispatch(PlayerCommand::SetVolume(level));
    }

    #[wasm_bindgen(js_name = playTrack)]
    pub fn play_track(&mut self, index: usize) {
        self.inner.dispatch(PlayerCommand::SelectTrack(index));
    }

    /// Add a track to the play-next queue
    pub fn enqueue(&mut self, index: usize) -> bool {
        self.inner.enqueue(index)
    }

    // ===== Audio Element Events =====

    #[wasm_bindgen(js_name = onTimeUpdate)]
    pub fn on_time_update(&mut self, seconds: f64) {
        self.inner.handle_sink_event(SinkEvent::TimeUpdate(seconds));
    }

    #[wasm_bindgen(js_name = onDurationKnown)]
    pub fn on_duration_known(&mut self, seconds: f64) {
        self.inner.handle_sink_event(SinkEvent::DurationKnown(seconds));
    }

    #[wasm_bindgen(js_name = onEnded)]
    pub fn on_ended(&mut self) {
        self.inner.handle_sink_event(SinkEvent::Ended);
    }

    // ===== State Queries =====

    /// Current snapshot, as passed to `onRender`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
