//! `<audio>` element sink

use super::file::BrowserFile;
use crate::error::{PlaybackError, Result};
use crate::sink::AudioSink;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAudioElement, Url};

/// Human-readable message for a thrown JS value
fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(error.name()), String::from(error.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: JsValue) -> PlaybackError {
    PlaybackError::sink(describe(&value))
}

/// Object URL for a blob, revoked when dropped
#[derive(Debug)]
struct ObjectUrl(String);

impl ObjectUrl {
    fn new(blob: &Blob) -> Result<Self> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(js_error)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if Url::revoke_object_url(&self.0).is_err() {
            debug!(url = %self.0, "Failed to revoke object URL");
        }
    }
}

/// Plays tracks through an `HtmlAudioElement`
///
/// Holds at most one object URL: opening a track revokes the previous one.
pub struct HtmlAudioSink {
    element: HtmlAudioElement,
    object_url: Option<ObjectUrl>,
}

impl HtmlAudioSink {
    pub fn new(element: HtmlAudioElement) -> Self {
        Self {
            element,
            object_url: None,
        }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl AudioSink for HtmlAudioSink {
    type Source = BrowserFile;

    fn open(&mut self, source: &BrowserFile) -> Result<()> {
        let url = ObjectUrl::new(source.as_blob())?;
        self.element.set_src(url.as_str());
        // Replacing the guard revokes the previous URL
        self.object_url = Some(url);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let promise = self.element.play().map_err(js_error)?;

        // NotAllowedError (autoplay) and NotSupportedError arrive as a
        // rejection after this call returns
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(rejection) = JsFuture::from(promise).await {
                warn!(message = %describe(&rejection), "Audio element refused to play");
            }
        });
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.element.pause().map_err(js_error)
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) -> Result<()> {
        self.element.set_current_time(seconds);
        Ok(())
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.element.duration();
        duration.is_finite().then_some(duration)
    }

    fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.element.set_volume(volume);
        Ok(())
    }
}
