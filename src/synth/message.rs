use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer};

#[cfg(feature = "rtrb")]
use crate::error::PlayerError;
use crate::{dsp::OscillatorWaveform, error::Result};

/// Control messages from the engine to the tone voice.
///
/// Every message carries the session (activation) it belongs to. The voice
/// drops messages whose session is not the one it is playing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ToneMessage {
    Start {
        session: u64,
        waveform: OscillatorWaveform,
        base_hz: f32,
        lfo_hz: f32,
        vibrato_depth_hz: f32,
        cutoff_hz: f32,
        q: f32,
        level: f32,
        fade_in_secs: f32,
    },
    Glide {
        session: u64,
        frequency_hz: f32,
        secs: f32,
    },
    SetLevel {
        session: u64,
        level: f32,
        secs: f32,
    },
    Release {
        session: u64,
        fade_secs: f32,
        grace_secs: f32,
    },
}

impl ToneMessage {
    pub fn session(&self) -> u64 {
        match *self {
            ToneMessage::Start { session, .. }
            | ToneMessage::Glide { session, .. }
            | ToneMessage::SetLevel { session, .. }
            | ToneMessage::Release { session, .. } => session,
        }
    }
}

/// Audio-thread side: where the voice pulls its messages from.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ToneMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for VecDeque<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        self.pop_front()
    }
}

/// Control side: where the engine sends its messages.
pub trait ToneSink {
    fn send(&mut self, msg: ToneMessage) -> Result<()>;
}

#[cfg(feature = "rtrb")]
impl ToneSink for Producer<ToneMessage> {
    fn send(&mut self, msg: ToneMessage) -> Result<()> {
        if self.is_abandoned() {
            return Err(PlayerError::SinkDisconnected);
        }
        self.push(msg).map_err(|_| PlayerError::SinkFull)
    }
}

impl ToneSink for VecDeque<ToneMessage> {
    fn send(&mut self, msg: ToneMessage) -> Result<()> {
        self.push_back(msg);
        Ok(())
    }
}

impl ToneSink for Vec<ToneMessage> {
    fn send(&mut self, msg: ToneMessage) -> Result<()> {
        self.push(msg);
        Ok(())
    }
}

impl<T: ToneSink + ?Sized> ToneSink for Box<T> {
    fn send(&mut self, msg: ToneMessage) -> Result<()> {
        (**self).send(msg)
    }
}

/// Sink for when no audio device is available. Accepts and drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn send(&mut self, _msg: ToneMessage) -> Result<()> {
        Ok(())
    }
}
