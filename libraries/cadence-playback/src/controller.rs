//! Playback controller - core orchestration
//!
//! Coordinates library, queue, shuffle/repeat resolution, volume and the
//! audio sink, and paints a snapshot after every change.

use crate::{
    error::{PlaybackError, Result},
    events::{PlayerCommand, SinkEvent},
    queue::Queue,
    shuffle::pick_next_index,
    sink::AudioSink,
    time::format_time,
    types::{PlaybackConfig, PlaybackState, PlaybackStatus},
    view::{progress_percent, NowPlaying, PlaybackSnapshot, TrackView, ViewRenderer},
    volume::Volume,
};
use cadence_library::{MediaFile, PlaybackLibrary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// Duration reported by a sink, if it is a usable number
fn known_duration(seconds: f64) -> Option<f64> {
    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

/// Log the outcome of an operation whose failure the user never sees
fn log_ignored(operation: &'static str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(PlaybackError::Sink(message)) => {
            warn!(operation, %message, "Audio sink rejected operation");
        }
        Err(error) => debug!(operation, %error, "Ignoring operation"),
    }
}

/// Central playback control
///
/// Owns the library and all playback state, and drives one [`AudioSink`].
/// Every public operation runs to completion and ends by handing a fresh
/// [`PlaybackSnapshot`] to the [`ViewRenderer`] (operations that turn out to
/// be no-ops skip the repaint).
///
/// Invalid requests (out-of-range index, seek before metadata, ...) are
/// ignored silently; indices always come from the controller's own
/// snapshots, so they only go stale in harmless races.
pub struct PlaybackController<S, V, R = StdRng>
where
    S: AudioSink,
{
    library: PlaybackLibrary<S::Source>,
    queue: Queue,
    status: PlaybackStatus,

    // Settings
    shuffle: bool,
    repeat: bool,
    volume: Volume,

    // Progress, as reported by the sink
    current_time: f64,
    duration: Option<f64>,

    filter: String,

    sink: S,
    view: V,
    rng: R,
}

impl<S, V> PlaybackController<S, V>
where
    S: AudioSink,
    S::Source: MediaFile,
    V: ViewRenderer,
{
    /// Create a controller with an entropy-seeded shuffle source
    pub fn new(sink: S, view: V, config: PlaybackConfig) -> Result<Self> {
        Self::with_rng(sink, view, config, StdRng::from_entropy())
    }
}

impl<S, V, R> PlaybackController<S, V, R>
where
    S: AudioSink,
    S::Source: MediaFile,
    V: ViewRenderer,
    R: Rng,
{
    /// Create a controller with an explicit shuffle source
    ///
    /// Pass a seeded RNG to make shuffle sequences reproducible.
    pub fn with_rng(mut sink: S, view: V, config: PlaybackConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let library = PlaybackLibrary::with_config(config.library)?;
        let volume = Volume::new(config.volume);

        log_ignored("set_volume", sink.set_volume(volume.gain()));

        let mut controller = Self {
            library,
            queue: Queue::new(),
            status: PlaybackStatus::Empty,
            shuffle: config.shuffle,
            repeat: config.repeat,
            volume,
            current_time: 0.0,
            duration: None,
            filter: String::new(),
            sink,
            view,
            rng,
        };
        controller.render();
        Ok(controller)
    }

    // ===== Library =====

    /// Replace the library with the audio files among `files`
    ///
    /// Clears the queue and loads (without playing) the first track.
    pub fn load_library<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = S::Source>,
    {
        if self.status.is_playing() {
            log_ignored("pause", self.sink.pause());
        }

        self.library.load(files);
        self.queue.clear();
        self.status = PlaybackStatus::Empty;
        self.current_time = 0.0;
        self.duration = None;
        debug!(tracks = self.library.len(), "Library replaced");

        if !self.library.is_empty() {
            log_ignored("load_track", self.open_track(0));
        }
        self.render();
    }

    /// Set the playlist filter
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.render();
    }

    // ===== Playback Control =====

    /// Make `index` the current track without starting it
    ///
    /// The play/pause flag is left as it was. Out-of-range indices are ignored.
    pub fn load_track(&mut self, index: usize) {
        let result = self.open_track(index);
        let changed = result.is_ok() || matches!(result, Err(PlaybackError::Sink(_)));
        log_ignored("load_track", result);
        if changed {
            self.render();
        }
    }

    /// Load `index` and start playing it
    pub fn play_track(&mut self, index: usize) {
        let result = self.start_track(index);
        let changed = !matches!(result, Err(PlaybackError::InvalidIndex(_)));
        log_ignored("play_track", result);
        if changed {
            self.render();
        }
    }

    /// Play/pause button
    ///
    /// Loads the first track when nothing is loaded yet.
    pub fn toggle_play_pause(&mut self) {
        if self.status == PlaybackStatus::Empty && !self.library.is_empty() {
            log_ignored("load_track", self.open_track(0));
        }

        let result = if self.status.is_playing() {
            self.pause_current()
        } else {
            self.play_current()
        };
        log_ignored("toggle_play_pause", result);
        self.render();
    }

    /// Start or resume playback of the current track
    pub fn play(&mut self) {
        let result = self.play_current();
        log_ignored("play", result);
        self.render();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        let result = self.pause_current();
        log_ignored("pause", result);
        self.render();
    }

    /// Skip to the next track
    ///
    /// Resolution order: play-next queue, shuffle, next in library, repeat
    /// from the top. At the end of the library with repeat off nothing
    /// happens.
    pub fn advance(&mut self) {
        let result = self.advance_inner().map(|_| ());
        log_ignored("advance", result);
        self.render();
    }

    /// Go to the previous track
    ///
    /// Wraps from the first track to the last one (with a single track that
    /// replays it).
    pub fn retreat(&mut self) {
        let result = match self.status.current_index() {
            Some(0) => self.start_track(self.library.len() - 1),
            Some(current) => self.start_track(current - 1),
            None => Err(PlaybackError::NoTrackLoaded),
        };
        log_ignored("retreat", result);
        self.render();
    }

    // ===== Queue Management =====

    /// Add a track to the end of the play-next queue
    ///
    /// Ignored for out-of-range indices, the current track and tracks
    /// already queued. Returns whether the track was added.
    pub fn enqueue(&mut self, index: usize) -> bool {
        if index >= self.library.len() {
            debug!(index, "Ignoring enqueue of unknown index");
            return false;
        }
        if self.status.current_index() == Some(index) {
            debug!(index, "Ignoring enqueue of current track");
            return false;
        }
        if !self.queue.push(index) {
            debug!(index, "Track already queued");
            return false;
        }

        debug!(index, queued = self.queue.len(), "Track queued");
        self.render();
        true
    }

    // ===== Seek & Volume =====

    /// Seek to a fraction of the track duration
    ///
    /// The fraction is not clamped; the sink handles out-of-range positions.
    /// Ignored while the duration is unknown.
    pub fn seek(&mut self, fraction: f64) {
        let result = self.seek_inner(fraction);
        let changed = result.is_ok();
        log_ignored("seek", result);
        if changed {
            self.render();
        }
    }

    /// Set volume (0-100)
    pub fn set_volume(&mut self, percent: u8) {
        self.volume.set_level(percent);
        log_ignored("set_volume", self.sink.set_volume(self.volume.gain()));
        self.render();
    }

    // ===== Shuffle & Repeat =====

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        debug!(shuffle = self.shuffle, "Shuffle toggled");
        self.render();
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
        debug!(repeat = self.repeat, "Repeat toggled");
        self.render();
    }

    // ===== Event Dispatch =====

    /// Apply a user intent event
    pub fn dispatch(&mut self, command: PlayerCommand<S::Source>) {
        match command {
            PlayerCommand::LoadFiles(files) => self.load_library(files),
            PlayerCommand::PlayPause => self.toggle_play_pause(),
            PlayerCommand::Previous => self.retreat(),
            PlayerCommand::Next => self.advance(),
            PlayerCommand::ToggleShuffle => self.toggle_shuffle(),
            PlayerCommand::ToggleRepeat => self.toggle_repeat(),
            PlayerCommand::Seek(fraction) => self.seek(fraction),
            PlayerCommand::Filter(text) => self.set_filter(text),
            PlayerCommand::SetVolume(percent) => self.set_volume(percent),
            PlayerCommand::SelectTrack(index) => self.play_track(index),
            PlayerCommand::QueueTrack(index) => {
                self.enqueue(index);
            }
        }
    }

    /// Apply a notification from the audio sink
    pub fn handle_sink_event(&mut self, event: SinkEvent) {
        match event {
            SinkEvent::TimeUpdate(seconds) => {
                self.current_time = if seconds.is_finite() {
                    seconds.max(0.0)
                } else {
                    0.0
                };
                trace!(seconds = self.current_time, "Time update");
            }
            SinkEvent::DurationKnown(seconds) => {
                self.duration = known_duration(seconds);
                debug!(duration = ?self.duration, "Duration known");
            }
            SinkEvent::Ended => {
                match self.advance_inner() {
                    // The sink halted on its own; reflect that
                    Ok(false) => {
                        if let PlaybackStatus::Playing(index) = self.status {
                            self.status = PlaybackStatus::Paused(index);
                        }
                        debug!("Reached end of library");
                    }
                    Ok(true) => {}
                    Err(error) => log_ignored("advance", Err(error)),
                }
            }
        }
        self.render();
    }

    // ===== State Queries =====

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.status.current_index(),
            is_playing: self.status.is_playing(),
            is_shuffle: self.shuffle,
            is_repeat: self.repeat,
            volume: self.volume.level(),
            current_time: self.current_time,
            duration: self.duration,
        }
    }

    pub fn library(&self) -> &PlaybackLibrary<S::Source> {
        &self.library
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Direct sink access for hosts that need element-level control
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Build the snapshot the view is painted from
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let current = self.status.current_index();
        let playing = self.status.is_playing();

        let tracks = self
            .library
            .search(&self.filter)
            .map(|(track, index)| TrackView {
                id: track.id().as_str().to_string(),
                index,
                display_name: track.display_name().to_string(),
                is_current: current == Some(index),
                is_playing: playing && current == Some(index),
                is_queued: self.queue.contains(index),
            })
            .collect();

        let now_playing = current.and_then(|index| {
            self.library.get(index).map(|track| NowPlaying {
                display_name: track.display_name().to_string(),
                position: index + 1,
                total: self.library.len(),
            })
        });

        PlaybackSnapshot {
            tracks,
            stats: self.library.stats(),
            state: self.state(),
            now_playing,
            queue: self.queue.iter().collect(),
            filter: self.filter.clone(),
            current_time_label: format_time(Some(self.current_time)),
            duration_label: format_time(self.duration),
            progress_percent: progress_percent(self.current_time, self.duration),
            volume_label: self.volume.label(),
        }
    }

    // ===== Internal =====

    fn render(&mut self) {
        let snapshot = self.snapshot();
        self.view.render(&snapshot);
    }

    /// Open a track on the sink and make it current
    ///
    /// State is updated even if the sink fails, so the view follows the
    /// user's choice.
    fn open_track(&mut self, index: usize) -> Result<()> {
        let track = self
            .library
            .get(index)
            .ok_or(PlaybackError::InvalidIndex(index))?;
        debug!(index, track = %track.display_name(), "Loading track");

        let opened = self.sink.open(track.source());

        self.status = if self.status.is_playing() {
            PlaybackStatus::Playing(index)
        } else {
            PlaybackStatus::Loaded(index)
        };
        // The current track must never sit in the queue
        self.queue.remove(index);
        self.current_time = 0.0;
        self.duration = None;

        opened
    }

    fn start_track(&mut self, index: usize) -> Result<()> {
        let opened = self.open_track(index);
        if let Err(PlaybackError::InvalidIndex(_)) = opened {
            return opened;
        }
        log_ignored("load_track", opened);
        self.play_current()
    }

    fn play_current(&mut self) -> Result<()> {
        let index = self
            .status
            .current_index()
            .ok_or(PlaybackError::NoTrackLoaded)?;
        self.status = PlaybackStatus::Playing(index);
        self.sink.play()
    }

    fn pause_current(&mut self) -> Result<()> {
        let index = self
            .status
            .current_index()
            .ok_or(PlaybackError::NoTrackLoaded)?;
        if self.status.is_playing() {
            self.status = PlaybackStatus::Paused(index);
        }
        self.sink.pause()
    }

    /// Resolve and start the next track
    ///
    /// Returns `false` when the end of the library was reached with
    /// nothing left to play.
    fn advance_inner(&mut self) -> Result<bool> {
        if let Some(next) = self.queue.pop_front() {
            debug!(index = next, "Playing from queue");
            self.start_track(next)?;
            return Ok(true);
        }

        let current = self
            .status
            .current_index()
            .ok_or(PlaybackError::NoTrackLoaded)?;
        let len = self.library.len();

        if self.shuffle {
            let next = pick_next_index(&mut self.rng, len, Some(current))
                .ok_or(PlaybackError::NoTrackLoaded)?;
            debug!(index = next, "Shuffle pick");
            self.start_track(next)?;
            return Ok(true);
        }

        if current + 1 < len {
            self.start_track(current + 1)?;
            return Ok(true);
        }

        if self.repeat {
            debug!("Repeating library");
            self.start_track(0)?;
            return Ok(true);
        }

        Ok(false)
    }

    fn seek_inner(&mut self, fraction: f64) -> Result<()> {
        if self.status.current_index().is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }
        if !fraction.is_finite() {
            return Err(PlaybackError::InvalidSeek(fraction));
        }

        let duration = self
            .sink
            .duration()
            .and_then(known_duration)
            .or(self.duration)
            .ok_or(PlaybackError::UnknownDuration)?;

        self.sink.set_current_time(fraction * duration)?;
        self.current_time = self.sink.current_time().max(0.0);
        Ok(())
    }
}
