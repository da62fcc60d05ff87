use crate::{
    dsp::oscillator::OscillatorBlock,
    graph::node::{GraphNode, RenderCtx},
};

/*
LFO (Low Frequency Oscillator)
==============================

An oscillator at sub-audio rate whose output (-1.0 to +1.0) moves a
parameter instead of being heard. Each genre sets its own rate:

  Ambient      0.3 Hz   slow drift, ~3 s per cycle
  Lo-Fi        0.5 Hz   gentle tape-like wow
  Chillstep    1 Hz
  Synthwave    2 Hz
  Electronic   4 Hz
  Drum & Bass  6 Hz     classic vibrato speed

Vibrato: LFO → oscillator frequency

  let vibrato = OscNode::sawtooth()
      .with_frequency(220.0)
      .modulate(LfoNode::sine(2.0), OscParam::Frequency, 11.0);
*/

pub struct LfoNode {
    osc: OscillatorBlock,
    /// Rate in Hz. The voice's note frequency never reaches the LFO.
    frequency: f32,
}

impl LfoNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::sine(),
            frequency,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency.max(0.0);
    }
}

impl GraphNode for LfoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc
            .render(out, &RenderCtx::from_freq(ctx.sample_rate, self.frequency));
    }

    fn reset(&mut self) {
        self.osc.reset();
    }
}
