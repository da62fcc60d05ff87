// Realtime side of the player: the tone voice and the messages that drive it.
// The engine talks to the voice only through a ToneSink.

pub mod message;
pub mod voice;

pub use message::{MessageReceiver, SilentSink, ToneMessage, ToneSink};
pub use voice::{ToneGraph, ToneVoice, VoiceState};
