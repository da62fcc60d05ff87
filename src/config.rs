//! Player tuning knobs.
//!
//! Defaults reproduce the web widget's timing exactly. Setters chain, so a
//! custom player reads the way it sounds:
//!
//! ```
//! use std::time::Duration;
//! use tonedeck::PlayerConfig;
//!
//! let config = PlayerConfig::new()
//!     .tick_interval(Duration::from_millis(250))
//!     .initial_volume(0.8);
//! assert_eq!(config.tick_interval, Duration::from_millis(250));
//! ```

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Wall-clock time between sequencer ticks
    pub tick_interval: Duration,
    /// Level fade on activation (seconds)
    pub fade_in_secs: f32,
    /// Level fade on deactivation (seconds)
    pub fade_out_secs: f32,
    /// Frequency glide between notes and level glide on volume change (seconds)
    pub glide_secs: f32,
    /// Time after deactivation before the oscillators are released
    pub release_grace: Duration,
    /// Output level at volume 1.0
    pub level_scale: f32,
    /// Vibrato depth as a fraction of the base frequency
    pub vibrato_ratio: f32,
    /// Low-pass resonance
    pub filter_q: f32,
    /// Volume before the listener touches the slider, 0.0-1.0
    pub initial_volume: f32,
}

impl PlayerConfig {
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_millis(400),
            fade_in_secs: 0.3,
            fade_out_secs: 0.1,
            glide_secs: 0.1,
            release_grace: Duration::from_millis(150),
            level_scale: 0.15,
            vibrato_ratio: 0.05,
            filter_q: 5.0,
            initial_volume: 0.5,
        }
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn fade_in(mut self, secs: f32) -> Self {
        self.fade_in_secs = secs;
        self
    }

    pub fn fade_out(mut self, secs: f32) -> Self {
        self.fade_out_secs = secs;
        self
    }

    pub fn glide(mut self, secs: f32) -> Self {
        self.glide_secs = secs;
        self
    }

    pub fn release_grace(mut self, grace: Duration) -> Self {
        self.release_grace = grace;
        self
    }

    pub fn level_scale(mut self, scale: f32) -> Self {
        self.level_scale = scale;
        self
    }

    pub fn vibrato_ratio(mut self, ratio: f32) -> Self {
        self.vibrato_ratio = ratio;
        self
    }

    pub fn filter_q(mut self, q: f32) -> Self {
        self.filter_q = q;
        self
    }

    pub fn initial_volume(mut self, volume: f32) -> Self {
        self.initial_volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Output level for a slider volume in [0, 1].
    pub fn level_for(&self, volume: f32) -> f32 {
        volume.clamp(0.0, 1.0) * self.level_scale
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
