//! The fixed track catalog.
//!
//! Tracks are descriptors only: there is no audio behind them. The player
//! borrows the genre to pick a [`GenreProfile`](crate::profile::GenreProfile)
//! and the duration label to size its simulated clock.

mod time;

pub use time::{format_clock, ParseDurationError, TrackTime};

/// One entry in the catalog, exactly as it is shown to the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
    /// Display label in `M:SS` form
    pub duration: &'static str,
    /// Display label such as "12.4K"
    pub plays: &'static str,
}

impl Track {
    /// Track length parsed from the label; malformed labels count as zero.
    pub fn length(&self) -> TrackTime {
        TrackTime::parse_or_zero(self.duration)
    }
}

pub static CATALOG: [Track; 6] = [
    Track {
        title: "Neon Dreams",
        author: "AI Studio",
        genre: "Synthwave",
        duration: "3:42",
        plays: "12.4K",
    },
    Track {
        title: "Midnight Flow",
        author: "beatmaker_pro",
        genre: "Lo-Fi",
        duration: "2:58",
        plays: "8.7K",
    },
    Track {
        title: "Electric Pulse",
        author: "SoundForge AI",
        genre: "Electronic",
        duration: "4:15",
        plays: "23.1K",
    },
    Track {
        title: "Velvet Sky",
        author: "marina_music",
        genre: "Ambient",
        duration: "5:03",
        plays: "6.2K",
    },
    Track {
        title: "Bass Theory",
        author: "AI Studio",
        genre: "Drum & Bass",
        duration: "3:27",
        plays: "15.8K",
    },
    Track {
        title: "Crystal Rain",
        author: "dj_nova",
        genre: "Chillstep",
        duration: "4:48",
        plays: "9.5K",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_durations_are_well_formed() {
        for track in &CATALOG {
            let parsed = TrackTime::parse(track.duration);
            assert!(parsed.is_ok(), "{} has bad duration {:?}", track.title, track.duration);
            assert!(!track.length().is_zero());
        }
    }

    #[test]
    fn test_midnight_flow_length() {
        let track = &CATALOG[1];
        assert_eq!(track.title, "Midnight Flow");
        assert_eq!(track.length().as_secs(), 178);
    }
}
