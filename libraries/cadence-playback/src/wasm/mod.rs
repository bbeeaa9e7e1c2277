//! Browser bindings for cadence-playback
//!
//! Drives an `<audio>` element and hands snapshots to a JavaScript callback.
//! The page wires DOM events to [`WasmPlayer`] methods.

pub mod file;
pub mod player;
pub mod sink;

pub use file::BrowserFile;
pub use player::WasmPlayer;
pub use sink::HtmlAudioSink;
