pub mod catalog; // Static track catalog and M:SS track times
pub mod config;
pub mod controller; // Transport state: selected track and play flag
pub mod dsp;
pub mod engine; // Synthetic player engine and its repeating timer
pub mod error;
pub mod graph; // Composable audio graph nodes
pub mod player;
pub mod profile; // Genre -> synthesis parameters and note pattern
pub mod synth; // Realtime tone voice and its control messages

pub use catalog::{Track, TrackTime, CATALOG};
pub use config::PlayerConfig;
pub use controller::PlaybackController;
pub use engine::{EngineEvent, PlayerEngine};
pub use error::{PlayerError, Result};
pub use player::{Player, PlayerView};
pub use profile::GenreProfile;
pub use synth::{SilentSink, ToneMessage, ToneSink, ToneVoice};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
