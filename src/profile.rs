//! Genre profiles: how each genre's placeholder tone is synthesized.
//!
//! Synthesis parameters and the melodic loop live in one value per genre, so
//! the fallback for an unknown genre happens in exactly one place.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::dsp::OscillatorWaveform;

/// Genre used when a track's genre has no profile.
pub const DEFAULT_GENRE: &str = "Ambient";

/// Synthesis parameters plus note pattern for one genre
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreProfile {
    pub name: &'static str,
    /// Root of the melodic loop (Hz)
    pub base_frequency: f32,
    pub waveform: OscillatorWaveform,
    /// Vibrato LFO rate (Hz)
    pub lfo_rate: f32,
    /// Low-pass cutoff (Hz)
    pub filter_cutoff: f32,
    /// Semitone offsets from the base, cycled one step per tick
    pub pattern: &'static [i8],
}

pub static PROFILES: [GenreProfile; 6] = [
    GenreProfile {
        name: "Synthwave",
        base_frequency: 220.0,
        waveform: OscillatorWaveform::Saw,
        lfo_rate: 2.0,
        filter_cutoff: 800.0,
        pattern: &[0, 3, 7, 12, 7, 3, 0, -5],
    },
    GenreProfile {
        name: "Lo-Fi",
        base_frequency: 196.0,
        waveform: OscillatorWaveform::Triangle,
        lfo_rate: 0.5,
        filter_cutoff: 600.0,
        pattern: &[0, 4, 7, 0, 3, 7, 12, 7],
    },
    GenreProfile {
        name: "Electronic",
        base_frequency: 261.0,
        waveform: OscillatorWaveform::Square,
        lfo_rate: 4.0,
        filter_cutoff: 1200.0,
        pattern: &[0, 0, 12, 0, 7, 0, 5, 0],
    },
    GenreProfile {
        name: DEFAULT_GENRE,
        base_frequency: 174.0,
        waveform: OscillatorWaveform::Sine,
        lfo_rate: 0.3,
        filter_cutoff: 400.0,
        pattern: &[0, 7, 12, 7, 5, 12, 7, 0],
    },
    GenreProfile {
        name: "Drum & Bass",
        base_frequency: 293.0,
        waveform: OscillatorWaveform::Saw,
        lfo_rate: 6.0,
        filter_cutoff: 1500.0,
        pattern: &[0, 0, 12, 7, 0, 0, 10, 5],
    },
    GenreProfile {
        name: "Chillstep",
        base_frequency: 185.0,
        waveform: OscillatorWaveform::Triangle,
        lfo_rate: 1.0,
        filter_cutoff: 700.0,
        pattern: &[0, 5, 7, 12, 10, 7, 5, 0],
    },
];

/// Convert a semitone offset from `base` into a frequency.
#[inline]
pub fn semitones_to_freq(base: f32, semitones: i8) -> f32 {
    base * 2.0_f32.powf(f32::from(semitones) / 12.0)
}

impl GenreProfile {
    /// Profile for `genre`, or the default profile when it is unknown.
    pub fn lookup(genre: &str) -> &'static GenreProfile {
        Self::find(genre).unwrap_or_else(Self::default_profile)
    }

    /// Exact-match lookup without fallback.
    pub fn find(genre: &str) -> Option<&'static GenreProfile> {
        PROFILES.iter().find(|p| p.name == genre)
    }

    pub fn default_profile() -> &'static GenreProfile {
        PROFILES
            .iter()
            .find(|p| p.name == DEFAULT_GENRE)
            .unwrap_or(&PROFILES[0])
    }

    /// Semitone offset at pattern step `step`, wrapping at the pattern end.
    pub fn semitones_at(&self, step: usize) -> i8 {
        if self.pattern.is_empty() {
            return 0;
        }
        self.pattern[step % self.pattern.len()]
    }

    /// Frequency at pattern step `step`: `base × 2^(pattern[step]/12)`.
    pub fn note_frequency(&self, step: usize) -> f32 {
        semitones_to_freq(self.base_frequency, self.semitones_at(step))
    }

    /// Vibrato depth in Hz for a depth ratio of the base frequency.
    pub fn vibrato_depth(&self, ratio: f32) -> f32 {
        self.base_frequency * ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_genres() {
        for name in ["Synthwave", "Lo-Fi", "Electronic", "Ambient", "Drum & Bass", "Chillstep"] {
            assert_eq!(GenreProfile::lookup(name).name, name);
        }
    }

    #[test]
    fn test_unknown_genre_falls_back_to_ambient() {
        let profile = GenreProfile::lookup("Polka");
        assert_eq!(profile.name, DEFAULT_GENRE);
        assert_eq!(profile.base_frequency, 174.0);
        assert_eq!(profile.waveform, OscillatorWaveform::Sine);
        assert!(GenreProfile::find("Polka").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(GenreProfile::lookup("lo-fi").name, DEFAULT_GENRE);
    }

    #[test]
    fn test_note_frequency_formula_for_every_genre() {
        for profile in &PROFILES {
            for (step, &semis) in profile.pattern.iter().enumerate() {
                let expected = profile.base_frequency * 2.0_f32.powf(semis as f32 / 12.0);
                let actual = profile.note_frequency(step);
                assert!(
                    (actual - expected).abs() < 1e-3,
                    "{} step {}: expected {}, got {}",
                    profile.name,
                    step,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_octave_and_wrap() {
        let lofi = GenreProfile::lookup("Lo-Fi");
        // step 6 is +12 semitones: one octave up
        assert!((lofi.note_frequency(6) - 392.0).abs() < 1e-3);
        // step 8 wraps to step 0
        assert_eq!(lofi.note_frequency(8), lofi.note_frequency(0));
        assert_eq!(lofi.note_frequency(0), 196.0);
    }

    #[test]
    fn test_negative_offset() {
        let synthwave = GenreProfile::lookup("Synthwave");
        // -5 semitones below A3 is E3
        assert!((synthwave.note_frequency(7) - 164.8138).abs() < 1e-2);
    }

    #[test]
    fn test_vibrato_depth_is_five_percent() {
        let lofi = GenreProfile::lookup("Lo-Fi");
        assert!((lofi.vibrato_depth(0.05) - 9.8).abs() < 1e-4);
    }
}
