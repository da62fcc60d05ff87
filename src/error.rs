//! Error types for the player library

use thiserror::Error;

/// Player errors
///
/// None of these reach the listener as a failure: the engine logs and
/// swallows sink errors, and the controller only rejects bad indices.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Track index is outside the catalog
    #[error("track index {index} out of range (catalog has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },

    /// Tone sink could not take another message
    #[error("tone sink is full")]
    SinkFull,

    /// Audio side of the tone sink has gone away
    #[error("tone sink disconnected")]
    SinkDisconnected,
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
