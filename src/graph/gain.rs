use crate::{
    dsp::LinearRamp,
    graph::node::{GraphNode, RenderCtx},
};

/*
Output Gain Stage
=================

Scales the signal by a level that can glide between values. This is the
"gain node" the player fades in and out:

  activate     0 → volume × 0.15 over 0.3 s
  volume       current → volume × 0.15 over 0.1 s
  deactivate   current → 0 over 0.1 s

A gain stage that has settled at zero reports itself inactive, so the voice
holding it knows the fade-out is complete.
*/

pub struct GainNode {
    level: LinearRamp,
}

impl GainNode {
    pub fn new(level: f32) -> Self {
        Self {
            level: LinearRamp::new(level),
        }
    }

    pub fn set_level(&mut self, level: f32) {
        self.level.set(level);
    }

    pub fn ramp_to(&mut self, level: f32, seconds: f32, sample_rate: f32) {
        self.level.ramp_to(level, seconds, sample_rate);
    }

    pub fn level(&self) -> f32 {
        self.level.value()
    }

    pub fn target_level(&self) -> f32 {
        self.level.target()
    }
}

impl GraphNode for GainNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        for sample in out.iter_mut() {
            *sample *= self.level.next_value();
        }
    }

    fn is_active(&self) -> bool {
        self.level.is_ramping() || self.level.value() != 0.0
    }
}
