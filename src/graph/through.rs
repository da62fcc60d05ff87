use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series, passing the output of the first
(source) into the second (effect). The tone voice is two of them:

    [Osc ~ LFO] ──→ [Low-pass] ──→ [Gain] ──→ output

1. Render the source into the output buffer
2. Pass that buffer through the effect (in-place processing)
*/

pub struct Through<S, F> {
    source: S,
    effect: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, effect: F) -> Self {
        Self { source, effect }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn effect_mut(&mut self) -> &mut F {
        &mut self.effect
    }

    pub fn effect(&self) -> &F {
        &self.effect
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.effect.render_block(out, ctx);
    }

    fn reset(&mut self) {
        self.source.reset();
        self.effect.reset();
    }

    fn is_active(&self) -> bool {
        self.source.is_active() && self.effect.is_active()
    }
}
