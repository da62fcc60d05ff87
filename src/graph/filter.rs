use crate::{
    dsp::filter::SVFilter,
    graph::node::{GraphNode, RenderCtx},
};

/*
Low-pass Tone Filter
====================

Each genre's oscillator runs through a resonant low-pass filter that sets
how dark or bright the placeholder tone sounds:

  Ambient      400 Hz   muffled, "through a wall"
  Lo-Fi        600 Hz
  Chillstep    700 Hz
  Synthwave    800 Hz
  Electronic   1200 Hz
  Drum & Bass  1500 Hz  most open, lets the saw bite

Resonance is expressed as Q. The player uses Q = 5, a clear peak at the
cutoff that gives filtered saws and squares their "synth" character
without self-oscillating.

Example usage:
  let dark = OscNode::sawtooth()
      .with_frequency(220.0)
      .through(FilterNode::lowpass(800.0).with_q(5.0));
*/

pub struct FilterNode {
    filter: SVFilter,
}

impl FilterNode {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        FilterNode {
            filter: SVFilter::lowpass(cutoff_hz),
        }
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.set_q(q);
        self
    }

    pub fn set_q(&mut self, q: f32) {
        self.filter.set_q(q);
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.filter.set_cutoff(cutoff_hz.clamp(20.0, 20_000.0));
    }

    pub fn cutoff(&self) -> f32 {
        self.filter.cutoff()
    }

    pub fn q(&self) -> f32 {
        self.filter.q()
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }

    fn reset(&mut self) {
        self.filter.reset();
    }
}
