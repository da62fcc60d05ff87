//! Controller and engine wired together.
//!
//! Every operation changes the transport state first, then reconciles the
//! engine with it: a pause or a different track tears the tone down, a
//! different track rewinds the clock, and playing starts a fresh tone.

use std::time::Duration;

use crate::{
    catalog::{format_clock, Track, CATALOG},
    config::PlayerConfig,
    controller::PlaybackController,
    engine::{EngineEvent, PlayerEngine},
    error::Result,
    synth::message::ToneSink,
};

/// Everything the now-playing bar needs, in display form.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub index: Option<usize>,
    pub track: Option<Track>,
    pub playing: bool,
    /// Elapsed time as `M:SS`
    pub elapsed: String,
    /// Track length label exactly as the catalog gives it
    pub total: &'static str,
    /// 0-100
    pub progress: f32,
    pub volume: f32,
    pub note_index: usize,
    /// Current note (Hz) while a tone is playing
    pub frequency: Option<f32>,
}

/// The decorative player. Dropping it releases the tone.
pub struct Player<S: ToneSink> {
    tracks: &'static [Track],
    controller: PlaybackController,
    engine: PlayerEngine<S>,
}

impl<S: ToneSink> Player<S> {
    /// Player over the built-in catalog with default tuning.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, PlayerConfig::default())
    }

    pub fn with_config(sink: S, config: PlayerConfig) -> Self {
        Self::with_tracks(&CATALOG, sink, config)
    }

    pub fn with_tracks(tracks: &'static [Track], sink: S, config: PlayerConfig) -> Self {
        Self {
            tracks,
            controller: PlaybackController::new(tracks.len()),
            engine: PlayerEngine::new(sink, config),
        }
    }

    pub fn select_track(&mut self, index: usize) -> Result<()> {
        let before = self.transport();
        self.controller.select_track(index)?;
        self.reconcile(before, false);
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) {
        let before = self.transport();
        self.controller.toggle_play_pause();
        self.reconcile(before, false);
    }

    pub fn next(&mut self) {
        let before = self.transport();
        self.controller.next();
        self.reconcile(before, false);
    }

    pub fn prev(&mut self) {
        let before = self.transport();
        self.controller.prev();
        self.reconcile(before, false);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.engine.set_volume(volume);
    }

    /// Jump to `percent` (0-100) of the current track.
    pub fn scrub(&mut self, percent: f32) {
        if self.engine.track().is_some() {
            self.engine.scrub(percent);
        }
    }

    /// Feed wall-clock time to the engine. A finished track moves on to the
    /// next one, which starts from zero even when it is the same track.
    pub fn advance(&mut self, dt: Duration) -> Option<EngineEvent> {
        let event = self.engine.advance(dt)?;
        match event {
            EngineEvent::TrackFinished => {
                let before = self.transport();
                self.controller.next();
                self.reconcile(before, true);
            }
        }
        Some(event)
    }

    fn transport(&self) -> (Option<usize>, bool) {
        (self.controller.current(), self.controller.is_playing())
    }

    fn reconcile(&mut self, before: (Option<usize>, bool), reload: bool) {
        let (before_index, was_playing) = before;
        let index = self.controller.current();
        let playing = self.controller.is_playing();
        let track_changed = reload || index != before_index;

        if track_changed {
            match index.and_then(|i| self.tracks.get(i)) {
                Some(track) => self.engine.load(*track),
                None => self.engine.deactivate(),
            }
        } else if playing != was_playing {
            // Play/pause on the same track starts over from zero
            self.engine.deactivate();
            self.engine.reset_position();
        }

        if playing && (track_changed || !was_playing) {
            self.engine.activate();
        }
    }

    pub fn snapshot(&self) -> PlayerView {
        let track = self.current_track().copied();
        PlayerView {
            index: self.controller.current(),
            playing: self.controller.is_playing(),
            elapsed: format_clock(self.engine.elapsed()),
            total: track.map_or("0:00", |t| t.duration),
            track,
            progress: self.engine.progress(),
            volume: self.engine.volume(),
            note_index: self.engine.note_index(),
            frequency: self.engine.frequency(),
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.controller.current().and_then(|i| self.tracks.get(i))
    }

    pub fn tracks(&self) -> &'static [Track] {
        self.tracks
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn engine(&self) -> &PlayerEngine<S> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        self.engine.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.engine.sink_mut()
    }
}
