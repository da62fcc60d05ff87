//! The synthetic player engine.
//!
//! Owns the simulated playback clock and the one tone session, and turns
//! activation, ticks, volume changes and teardown into [`ToneMessage`]s for
//! the voice. It never sees audio buffers.
//!
//! ```
//! use std::time::Duration;
//! use tonedeck::{PlayerConfig, PlayerEngine, ToneMessage, CATALOG};
//!
//! let mut engine = PlayerEngine::new(Vec::<ToneMessage>::new(), PlayerConfig::default());
//! engine.load(CATALOG[1]);
//! engine.activate();
//! engine.advance(Duration::from_millis(800));
//! assert_eq!(engine.elapsed(), Duration::from_millis(800));
//! ```

pub mod scheduler;

use std::time::Duration;

use tracing::{debug, trace, warn};

use self::scheduler::RepeatingTimer;
use crate::{
    catalog::Track,
    config::PlayerConfig,
    profile::GenreProfile,
    synth::message::{ToneMessage, ToneSink},
};

/// Something the player above the engine has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The clock reached the end of the track and wrapped to zero
    TrackFinished,
}

/// Everything that exists only while a tone is playing.
#[derive(Debug)]
struct ActiveSession {
    id: u64,
    profile: &'static GenreProfile,
    timer: RepeatingTimer,
    /// Frequency of the current note (Hz), without vibrato
    frequency: f32,
}

pub struct PlayerEngine<S: ToneSink> {
    config: PlayerConfig,
    sink: S,
    volume: f32,
    track: Option<Track>,
    total: Duration,
    elapsed: Duration,
    progress: f32,
    note_index: usize,
    session: Option<ActiveSession>,
    next_session_id: u64,
}

impl<S: ToneSink> PlayerEngine<S> {
    pub fn new(sink: S, config: PlayerConfig) -> Self {
        Self {
            volume: config.initial_volume.clamp(0.0, 1.0),
            config,
            sink,
            track: None,
            total: Duration::ZERO,
            elapsed: Duration::ZERO,
            progress: 0.0,
            note_index: 0,
            session: None,
            next_session_id: 1,
        }
    }

    /// Make `track` the current track. Tears down any tone and rewinds.
    pub fn load(&mut self, track: Track) {
        self.deactivate();
        self.total = track.length().as_duration();
        self.track = Some(track);
        self.reset_position();
    }

    /// Start the tone for the current track. Any running session is torn
    /// down first, so at most one tone ever exists.
    pub fn activate(&mut self) {
        self.deactivate();

        let Some(track) = self.track else {
            debug!("activate with no track loaded");
            return;
        };

        let profile = GenreProfile::lookup(track.genre);
        let id = self.next_session_id;
        self.next_session_id += 1;
        self.note_index = 0;

        self.send(ToneMessage::Start {
            session: id,
            waveform: profile.waveform,
            base_hz: profile.base_frequency,
            lfo_hz: profile.lfo_rate,
            vibrato_depth_hz: profile.vibrato_depth(self.config.vibrato_ratio),
            cutoff_hz: profile.filter_cutoff,
            q: self.config.filter_q,
            level: self.config.level_for(self.volume),
            fade_in_secs: self.config.fade_in_secs,
        });

        self.session = Some(ActiveSession {
            id,
            profile,
            timer: RepeatingTimer::new(self.config.tick_interval),
            frequency: profile.base_frequency,
        });

        debug!(
            session = id,
            track = track.title,
            genre = profile.name,
            "tone activated"
        );
    }

    /// Cancel the tick timer and fade the tone out. Does nothing when idle.
    pub fn deactivate(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        session.timer.cancel();
        self.send(ToneMessage::Release {
            session: session.id,
            fade_secs: self.config.fade_out_secs,
            grace_secs: self.config.release_grace.as_secs_f32(),
        });

        debug!(session = session.id, "tone deactivated");
    }

    /// Rewind the clock and the note loop to the start of the track.
    pub fn reset_position(&mut self) {
        self.elapsed = Duration::ZERO;
        self.progress = 0.0;
        self.note_index = 0;
    }

    /// Feed wall-clock time. Runs every tick that falls inside `dt` and
    /// stops at the first `TrackFinished`.
    pub fn advance(&mut self, dt: Duration) -> Option<EngineEvent> {
        let fires = match self.session.as_mut() {
            Some(session) => session.timer.advance(dt),
            None => return None,
        };

        for _ in 0..fires {
            if let Some(event) = self.tick() {
                return Some(event);
            }
        }
        None
    }

    /// One sequencer step: next note, clock forward by one tick interval.
    pub fn tick(&mut self) -> Option<EngineEvent> {
        let (id, profile) = match &self.session {
            Some(session) => (session.id, session.profile),
            None => return None,
        };

        self.note_index = (self.note_index + 1) % profile.pattern.len().max(1);
        let frequency = profile.note_frequency(self.note_index);
        if let Some(session) = self.session.as_mut() {
            session.frequency = frequency;
        }

        self.send(ToneMessage::Glide {
            session: id,
            frequency_hz: frequency,
            secs: self.config.glide_secs,
        });

        let next = self.elapsed + self.config.tick_interval;
        if next >= self.total {
            debug!(session = id, total = ?self.total, "track finished");
            self.elapsed = Duration::ZERO;
            self.progress = 0.0;
            return Some(EngineEvent::TrackFinished);
        }

        self.elapsed = next;
        self.progress = self.elapsed.as_secs_f32() / self.total.as_secs_f32() * 100.0;
        trace!(
            session = id,
            note = self.note_index,
            frequency,
            progress = self.progress,
            "tick"
        );
        None
    }

    /// Set the volume (clamped to 0..=1). Glides the live tone if there is one.
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);

        if let Some(id) = self.session.as_ref().map(|s| s.id) {
            self.send(ToneMessage::SetLevel {
                session: id,
                level: self.config.level_for(self.volume),
                secs: self.config.glide_secs,
            });
        }
    }

    /// Jump the clock to `percent` of the track. The note loop is untouched.
    pub fn scrub(&mut self, percent: f32) {
        if percent.is_nan() {
            return;
        }
        let percent = percent.clamp(0.0, 100.0);
        self.progress = percent;
        self.elapsed = self.total.mul_f32(percent / 100.0);
    }

    fn send(&mut self, msg: ToneMessage) {
        if let Err(err) = self.sink.send(msg) {
            warn!(session = msg.session(), error = %err, "tone message dropped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Progress through the track, 0-100.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn note_index(&self) -> usize {
        self.note_index
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current note frequency while a tone is playing.
    pub fn frequency(&self) -> Option<f32> {
        self.session.as_ref().map(|s| s.frequency)
    }

    pub fn session_id(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: ToneSink> Drop for PlayerEngine<S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
