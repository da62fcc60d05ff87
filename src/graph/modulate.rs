use crate::{
    dsp::modulate::block_average,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Connects an LFO to a parameter on another node. In the player this is the
vibrato: an LFO wobbling the oscillator frequency.

  let vibrato = OscNode::triangle()
      .with_frequency(196.0)
      .modulate(LfoNode::sine(0.5), OscParam::Frequency, 9.8);

    modulated_value = base_value + (LFO × depth)

With depth = 5% of the base frequency, the pitch swings ±5% around the
current note. See `dsp/modulate.rs` for the block-rate averaging.
*/

pub struct Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    source: S,
    lfo: L,
    param: S::Param,
    /// Offset at full LFO swing, in the parameter's own unit
    depth: f32,
    scratch: Vec<f32>,
}

impl<S, L> Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub fn new(source: S, lfo: L, param: S::Param, depth: f32) -> Self {
        Self {
            source,
            lfo,
            param,
            depth,
            scratch: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn lfo(&self) -> &L {
        &self.lfo
    }

    pub fn lfo_mut(&mut self) -> &mut L {
        &mut self.lfo
    }
}

impl<S, L> GraphNode for Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let scratch = &mut self.scratch[..chunk.len()];
            self.lfo.render_block(scratch, ctx);

            // One offset per chunk, taken at the LFO's mean over the chunk
            let offset = block_average(scratch) * self.depth;
            let base = self.source.get_param(self.param);
            self.source.apply_modulation(self.param, base, offset);

            self.source.render_block(chunk, ctx);
        }
    }

    fn reset(&mut self) {
        self.source.reset();
        self.lfo.reset();
    }

    fn is_active(&self) -> bool {
        self.source.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{
        extensions::NodeExt,
        lfo::LfoNode,
        oscillator::{OscNode, OscParam},
    };

    /// Count upward zero crossings, a cheap pitch estimate.
    fn rising_crossings(buffer: &[f32]) -> usize {
        buffer
            .windows(2)
            .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
            .count()
    }

    #[test]
    fn test_zero_depth_is_plain_oscillator() {
        let ctx = RenderCtx::new(48_000.0);
        let mut plain = OscNode::sine().with_frequency(220.0);
        let mut modulated = OscNode::sine()
            .with_frequency(220.0)
            .modulate(LfoNode::sine(4.0), OscParam::Frequency, 0.0);

        let mut a = vec![0.0; 512];
        let mut b = vec![0.0; 512];
        plain.render_block(&mut a, &ctx);
        modulated.render_block(&mut b, &ctx);

        assert_eq!(a, b);
    }

    #[test]
    fn test_vibrato_moves_pitch() {
        // A 1 Hz sine is near its peak from 0.125 s to 0.25 s
        let ctx = RenderCtx::new(48_000.0);
        let mut vibrato = OscNode::sine()
            .with_frequency(200.0)
            .modulate(LfoNode::sine(1.0), OscParam::Frequency, 100.0);

        let mut warmup = vec![0.0; 6_000];
        vibrato.render_block(&mut warmup, &ctx);

        let mut buffer = vec![0.0; 6_000];
        for chunk in buffer.chunks_mut(256) {
            vibrato.render_block(chunk, &ctx);
        }

        // 0.125 s at a plain 200 Hz gives 25 crossings; with vibrato well above
        assert!(rising_crossings(&buffer) > 30);
    }

    #[test]
    fn test_long_blocks_are_split() {
        let mut vibrato = OscNode::sine()
            .with_frequency(200.0)
            .modulate(LfoNode::sine(2.0), OscParam::Frequency, 10.0);
        let mut buffer = vec![0.0; MAX_BLOCK_SIZE * 2 + 17];
        vibrato.render_block(&mut buffer, &RenderCtx::new(48_000.0));
        assert!(buffer.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_set_depth() {
        let mut vibrato = OscNode::sine().modulate(LfoNode::sine(2.0), OscParam::Frequency, 10.0);
        vibrato.set_depth(9.8);
        assert_eq!(vibrato.depth(), 9.8);
        vibrato.lfo_mut().set_frequency(0.5);
        assert_eq!(vibrato.lfo_mut().frequency(), 0.5);
    }
}
