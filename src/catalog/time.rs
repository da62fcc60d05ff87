use std::{fmt, time::Duration};

use thiserror::Error;

/// Track length in whole seconds, as printed on a track label ("3:42").
/// Parsing and formatting are exact integer operations, so canonical labels
/// round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TrackTime {
    seconds: u32,
}

/// Why a duration label could not be read as `M:SS`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDurationError {
    #[error("missing ':' between minutes and seconds in {0:?}")]
    MissingSeparator(String),
    #[error("minutes are not a number in {0:?}")]
    InvalidMinutes(String),
    #[error("seconds must be exactly two digits in {0:?}")]
    InvalidSeconds(String),
    #[error("seconds must be below 60 in {0:?}")]
    SecondsOutOfRange(String),
}

impl TrackTime {
    pub const ZERO: TrackTime = TrackTime { seconds: 0 };

    pub const fn from_secs(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Parse a strict `M:SS` label. Minutes may have any number of digits,
    /// seconds must have exactly two.
    pub fn parse(label: &str) -> Result<Self, ParseDurationError> {
        let (minutes, seconds) = label
            .split_once(':')
            .ok_or_else(|| ParseDurationError::MissingSeparator(label.to_owned()))?;

        if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDurationError::InvalidMinutes(label.to_owned()));
        }
        if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDurationError::InvalidSeconds(label.to_owned()));
        }

        let minutes: u32 = minutes
            .parse()
            .map_err(|_| ParseDurationError::InvalidMinutes(label.to_owned()))?;
        let seconds: u32 = seconds
            .parse()
            .map_err(|_| ParseDurationError::InvalidSeconds(label.to_owned()))?;
        if seconds >= 60 {
            return Err(ParseDurationError::SecondsOutOfRange(label.to_owned()));
        }

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_secs)
            .ok_or_else(|| ParseDurationError::InvalidMinutes(label.to_owned()))
    }

    /// Parse a label, failing closed to zero seconds on malformed input.
    pub fn parse_or_zero(label: &str) -> Self {
        match Self::parse(label) {
            Ok(time) => time,
            Err(err) => {
                tracing::warn!(%err, "unreadable track duration, treating as 0:00");
                Self::ZERO
            }
        }
    }

    pub fn as_secs(self) -> u32 {
        self.seconds
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.seconds))
    }

    pub fn is_zero(self) -> bool {
        self.seconds == 0
    }
}

impl fmt::Display for TrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

/// Format a running clock as `M:SS`, truncating partial seconds.
pub fn format_clock(elapsed: Duration) -> String {
    let whole = elapsed.as_secs();
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_labels() {
        assert_eq!(TrackTime::parse("3:42").unwrap().as_secs(), 222);
        assert_eq!(TrackTime::parse("2:58").unwrap().as_secs(), 178);
        assert_eq!(TrackTime::parse("0:07").unwrap().as_secs(), 7);
        assert_eq!(TrackTime::parse("12:00").unwrap().as_secs(), 720);
    }

    #[test]
    fn test_catalog_labels_round_trip() {
        for label in ["3:42", "2:58", "4:15", "5:03", "3:27", "4:48", "0:00", "10:59"] {
            let time = TrackTime::parse(label).unwrap();
            assert_eq!(time.to_string(), label);
        }
    }

    #[test]
    fn test_rejects_malformed_labels() {
        assert!(matches!(
            TrackTime::parse("342"),
            Err(ParseDurationError::MissingSeparator(_))
        ));
        assert!(matches!(
            TrackTime::parse("x:42"),
            Err(ParseDurationError::InvalidMinutes(_))
        ));
        assert!(matches!(
            TrackTime::parse(":42"),
            Err(ParseDurationError::InvalidMinutes(_))
        ));
        assert!(matches!(
            TrackTime::parse("3:4"),
            Err(ParseDurationError::InvalidSeconds(_))
        ));
        assert!(matches!(
            TrackTime::parse("3:4a"),
            Err(ParseDurationError::InvalidSeconds(_))
        ));
        assert!(matches!(
            TrackTime::parse("3:75"),
            Err(ParseDurationError::SecondsOutOfRange(_))
        ));
        assert!(matches!(
            TrackTime::parse("1:02:03"),
            Err(ParseDurationError::InvalidSeconds(_))
        ));
    }

    #[test]
    fn test_parse_or_zero_fails_closed() {
        assert_eq!(TrackTime::parse_or_zero("soon"), TrackTime::ZERO);
        assert_eq!(TrackTime::parse_or_zero("4:15").as_secs(), 255);
    }

    #[test]
    fn test_format_clock_truncates() {
        assert_eq!(format_clock(Duration::ZERO), "0:00");
        assert_eq!(format_clock(Duration::from_millis(3_200)), "0:03");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "0:59");
        assert_eq!(format_clock(Duration::from_secs(222)), "3:42");
        assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
    }
}
