//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside the tone voice. They stay focused on the
//! signal-processing math so graph nodes can layer on modulation.

/// Resonant state-variable low-pass.
pub mod filter;
/// Block-rate modulation helpers.
pub mod modulate;
/// Oscillator waveforms.
pub mod oscillator;
/// Sample-accurate linear ramps for level fades and frequency glides.
pub mod ramp;

pub use oscillator::OscillatorWaveform;
pub use ramp::LinearRamp;
