use crate::error::{PlayerError, Result};

/// Transport state: which track is selected and whether it is playing.
///
/// Pure state. The [`Player`](crate::Player) reads it after every change and
/// reconciles the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackController {
    len: usize,
    current: Option<usize>,
    playing: bool,
}

impl PlaybackController {
    /// Controller over a catalog of `len` tracks, nothing selected.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: None,
            playing: false,
        }
    }

    /// Select track `index`. Selecting the current track toggles play/pause;
    /// any other track starts playing.
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(PlayerError::TrackOutOfRange {
                index,
                len: self.len,
            });
        }

        if self.current == Some(index) {
            self.playing = !self.playing;
        } else {
            self.current = Some(index);
            self.playing = true;
        }
        Ok(())
    }

    /// Flip play/pause. With nothing selected, starts the first track.
    pub fn toggle_play_pause(&mut self) {
        match self.current {
            Some(_) => self.playing = !self.playing,
            None if self.len > 0 => {
                self.current = Some(0);
                self.playing = true;
            }
            None => {}
        }
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = Some(match self.current {
            Some(i) => (i + 1) % self.len,
            None => 0,
        });
        self.playing = true;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = Some(match self.current {
            Some(i) => (i + self.len - 1) % self.len,
            None => 0,
        });
        self.playing = true;
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_new_track_plays() {
        let mut c = PlaybackController::new(6);
        c.select_track(2).unwrap();
        assert_eq!(c.current(), Some(2));
        assert!(c.is_playing());

        c.select_track(4).unwrap();
        assert_eq!(c.current(), Some(4));
        assert!(c.is_playing());
    }

    #[test]
    fn test_reselect_toggles() {
        let mut c = PlaybackController::new(6);
        c.select_track(2).unwrap();
        c.select_track(2).unwrap();
        assert_eq!(c.current(), Some(2));
        assert!(!c.is_playing());
        c.select_track(2).unwrap();
        assert!(c.is_playing());
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let mut c = PlaybackController::new(6);
        c.select_track(1).unwrap();
        let err = c.select_track(6).unwrap_err();
        assert!(matches!(err, PlayerError::TrackOutOfRange { index: 6, len: 6 }));
        assert_eq!(c.current(), Some(1));
        assert!(c.is_playing());
    }

    #[test]
    fn test_toggle_without_selection_starts_first() {
        let mut c = PlaybackController::new(6);
        c.toggle_play_pause();
        assert_eq!(c.current(), Some(0));
        assert!(c.is_playing());
        c.toggle_play_pause();
        assert_eq!(c.current(), Some(0));
        assert!(!c.is_playing());
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut c = PlaybackController::new(6);
        c.select_track(5).unwrap();
        c.next();
        assert_eq!(c.current(), Some(0));
        c.prev();
        assert_eq!(c.current(), Some(5));
    }

    #[test]
    fn test_next_prev_force_play() {
        let mut c = PlaybackController::new(6);
        c.select_track(3).unwrap();
        c.toggle_play_pause();
        assert!(!c.is_playing());
        c.next();
        assert!(c.is_playing());
        c.toggle_play_pause();
        c.prev();
        assert!(c.is_playing());
    }

    #[test]
    fn test_next_prev_without_selection() {
        let mut c = PlaybackController::new(6);
        c.next();
        assert_eq!(c.current(), Some(0));

        let mut c = PlaybackController::new(6);
        c.prev();
        assert_eq!(c.current(), Some(0));
        assert!(c.is_playing());
    }

    #[test]
    fn test_empty_catalog_stays_idle() {
        let mut c = PlaybackController::new(0);
        c.next();
        c.prev();
        c.toggle_play_pause();
        assert_eq!(c.current(), None);
        assert!(!c.is_playing());
        assert!(c.select_track(0).is_err());
    }
}
