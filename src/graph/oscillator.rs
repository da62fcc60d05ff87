use crate::dsp::{oscillator::OscillatorBlock, LinearRamp, OscillatorWaveform};
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

/*
Tone Oscillator
===============

The sound source of the player. Unlike a keyboard voice it does not follow
a note from the render context: it owns its frequency, and the player
moves that frequency along the genre's note pattern with short glides.

Waveform per genre and its character:

  Sine      Ambient           pure, hollow, no overtones
  Triangle  Lo-Fi, Chillstep  soft, weak odd harmonics
  Square    Electronic        hollow but punchy, odd harmonics
  Sawtooth  Synthwave, D&B    bright and buzzy, all harmonics

Frequency at each sample:

    f = glide.next() + vibrato_offset

`glide` is a linear ramp toward the current note. `vibrato_offset` is written
once per block by a `Modulate` wrapper driven by an LFO.

Example usage:
  let tone = OscNode::triangle()
      .with_frequency(196.0)
      .modulate(LfoNode::sine(0.5), OscParam::Frequency, 9.8)
      .through(FilterNode::lowpass(600.0));

  // later, on each sequencer tick
  tone_osc.glide_to(246.94, 0.1, sample_rate);
*/

pub struct OscNode {
    osc: OscillatorBlock,
    /// Gliding base frequency (Hz)
    frequency: LinearRamp,
    /// Offset added by modulation (Hz), refreshed once per block
    frequency_offset: f32,
}

/// Parameters that can be modulated on an oscillator
#[derive(Clone, Copy, Debug)]
pub enum OscParam {
    /// Oscillator frequency in Hz
    Frequency,
}

impl OscNode {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
            frequency: LinearRamp::new(440.0),
            frequency_offset: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorWaveform::Saw)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorWaveform::Triangle)
    }

    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.frequency.set(freq);
        self
    }

    pub fn set_waveform(&mut self, waveform: OscillatorWaveform) {
        self.osc.set_waveform(waveform);
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.osc.waveform()
    }

    /// Jump to `freq` with no glide.
    pub fn set_frequency(&mut self, freq: f32) {
        self.frequency.set(freq);
    }

    /// Glide linearly from the current frequency to `freq` over `seconds`.
    pub fn glide_to(&mut self, freq: f32, seconds: f32, sample_rate: f32) {
        self.frequency.ramp_to(freq, seconds, sample_rate);
    }

    /// Frequency the oscillator is at (or gliding toward), without vibrato.
    pub fn frequency(&self) -> f32 {
        self.frequency.value()
    }

    pub fn target_frequency(&self) -> f32 {
        self.frequency.target()
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for sample in out.iter_mut() {
            // Clamp to audible range (20 Hz - 20 kHz)
            let freq = (self.frequency.next_value() + self.frequency_offset).clamp(20.0, 20_000.0);
            *sample = self.osc.next_sample(freq, ctx.sample_rate);
        }
    }

    fn reset(&mut self) {
        self.osc.reset();
        self.frequency_offset = 0.0;
    }
}

impl Modulatable for OscNode {
    type Param = OscParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            OscParam::Frequency => self.frequency.value(),
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, _base: f32, modulation: f32) {
        match param {
            // The glide owns the base; modulation only rides on top of it
            OscParam::Frequency => self.frequency_offset = modulation,
        }
    }
}
